// src/cli.rs
use std::{env, error::Error, path::{Path, PathBuf}};

use crate::{
    config::consts::{DEFAULT_CONFIG_FILE, STORE_DIR},
    config::options::Preferences,
    csv,
    page::HtmlPage,
    progress::Progress,
    runner::{Commands, Outcome, Status, Tone},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Scrape { html: PathBuf, url: Option<String> },
    Compare { out: Option<PathBuf> },
    Clear,
    Reset,
    Prefs,
    Sets,
}

/// Preference overrides given on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefFlags {
    pub step: Option<u32>,
    pub delay: Option<u64>,
    pub set: Option<usize>,
    pub auto_compare: Option<bool>,
    pub show_matches: Option<bool>,
    pub copy_link: Option<bool>,
}

impl PrefFlags {
    pub fn is_empty(&self) -> bool {
        *self == PrefFlags::default()
    }

    pub fn apply(&self, p: &mut Preferences) {
        if let Some(v) = self.step { p.set_scroll_step(v); }
        if let Some(v) = self.delay { p.set_delay_ms(v); }
        if let Some(v) = self.set { p.sheet_set_index = v; }
        if let Some(v) = self.auto_compare { p.auto_compare = v; }
        if let Some(v) = self.show_matches { p.show_matches = v; }
        if let Some(v) = self.copy_link { p.copy_link = v; }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub prefs: PrefFlags,
    pub store_dir: PathBuf,
    pub config: PathBuf,
}

pub enum Mode {
    Cli(CliArgs),
    Gui,
}

impl Mode {
    /// Where the store blob and `debug.log` go for this run.
    pub fn store_dir(&self) -> &Path {
        match self {
            Mode::Cli(args) => &args.store_dir,
            Mode::Gui => Path::new(STORE_DIR),
        }
    }
}

// Decide CLI vs GUI
pub fn detect_mode() -> Result<Mode, Box<dyn Error>> {
    if env::args().len() == 1 {
        // only program name
        return Ok(Mode::Gui);
    }
    Ok(Mode::Cli(parse_args(env::args().skip(1))?))
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(env::args().skip(1))?;
    let _log = crate::log::init(&args.store_dir);
    execute(args)
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut command: Option<String> = None;
    let mut html: Option<PathBuf> = None;
    let mut url: Option<String> = None;
    let mut out: Option<PathBuf> = None;
    let mut prefs = PrefFlags::default();
    let mut store_dir = PathBuf::from(STORE_DIR);
    let mut config = PathBuf::from(DEFAULT_CONFIG_FILE);

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| format!("Missing value for {name}"));
        match a.as_str() {
            "--html" => html = Some(PathBuf::from(value("--html")?)),
            "--url" => url = Some(value("--url")?),
            "-o" | "--out" => out = Some(PathBuf::from(value("--out")?)),
            "--step" => prefs.step = Some(value("--step")?.parse()?),
            "--delay" => prefs.delay = Some(value("--delay")?.parse()?),
            "--set" => prefs.set = Some(value("--set")?.parse()?),
            "--auto-compare" => prefs.auto_compare = Some(parse_switch(&value("--auto-compare")?)?),
            "--show-matches" => prefs.show_matches = Some(parse_switch(&value("--show-matches")?)?),
            "--copy-link" => prefs.copy_link = Some(parse_switch(&value("--copy-link")?)?),
            "--store" => store_dir = PathBuf::from(value("--store")?),
            "--config" => config = PathBuf::from(value("--config")?),
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            s if s.starts_with('-') => return Err(format!("Unknown arg: {}", a).into()),
            _ if command.is_none() => command = Some(a.clone()),
            _ => return Err(format!("Unexpected argument: {}", a).into()),
        }
    }

    let command = match command.as_deref() {
        Some("scrape") => Command::Scrape {
            html: html.ok_or("scrape needs --html <file>")?,
            url,
        },
        Some("compare") => Command::Compare { out },
        Some("clear") => Command::Clear,
        Some("reset") => Command::Reset,
        Some("prefs") => Command::Prefs,
        Some("sets") => Command::Sets,
        Some(other) => return Err(format!("Unknown command: {}", other).into()),
        None => return Err("No command given (try --help)".into()),
    };

    Ok(CliArgs { command, prefs, store_dir, config })
}

fn parse_switch(v: &str) -> Result<bool, Box<dyn Error>> {
    match v.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(format!("Expected on/off, got: {}", other).into()),
    }
}

/* ---------------- Execution ---------------- */

struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self) {
        eprintln!("Scraper running...");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn iteration(&mut self, n: u32, total: usize) {
        eprintln!("  iteration {n}: {total} handle(s)");
    }
    fn complete(&mut self, count: usize) {
        eprintln!("Collected {count} handles.");
    }
}

fn report(status: &Status) {
    match status.tone {
        Tone::Warning | Tone::Error => eprintln!("{}", status.text),
        _ => println!("{}", status.text),
    }
}

pub fn execute(args: CliArgs) -> Result<(), Box<dyn Error>> {
    let cmds = Commands::new(&args.store_dir, &args.config);

    let mut prefs = cmds.preferences();
    if !args.prefs.is_empty() {
        args.prefs.apply(&mut prefs);
        cmds.set_preferences(&prefs)?;
        logf!("CLI: Preferences updated {:?}", args.prefs);
    }

    match args.command {
        Command::Scrape { html, url } => {
            let mut page = HtmlPage::open(&html, url.as_deref())?;
            let outcome = cmds.start_scrape(&mut page, Some(&mut CliProgress));
            report(&outcome.status());
            let scraped = matches!(outcome, Outcome::Scraped { .. });
            if let Outcome::Rejected(e) = outcome {
                return Err(e.into());
            }
            if scraped && prefs.auto_compare {
                finish_compare(&cmds, &prefs, None)?;
            }
        }
        Command::Compare { out } => finish_compare(&cmds, &prefs, out)?,
        Command::Clear => report(&cmds.clear_handles().status()),
        Command::Reset => {
            let outcome = cmds.reset_preferences();
            report(&outcome.status());
            if let Outcome::PrefsReset(p) = outcome {
                print_prefs(&p);
            }
        }
        Command::Prefs => print_prefs(&prefs),
        Command::Sets => {
            let cfg = cmds.config()?;
            for (i, set) in cfg.sheet_sets.iter().enumerate() {
                let mark = if i == prefs.sheet_set_index { "*" } else { " " };
                println!("{mark} {i}: {}", set.name);
            }
        }
    }
    Ok(())
}

fn finish_compare(cmds: &Commands, prefs: &Preferences, out: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let outcome = cmds.compare(Some(&mut CliProgress));
    report(&outcome.status());

    let matches = match &outcome {
        Outcome::Compared(r) => r.matches.as_slice(),
        Outcome::NoBoothMappings { matches, .. } | Outcome::FetchFailed { matches, .. } => matches.as_slice(),
        _ => &[],
    };
    if prefs.show_matches {
        for m in matches {
            println!("  {m}");
        }
    }

    if let Outcome::Compared(r) = &outcome {
        if prefs.copy_link { println!("{}", r.link); } else { println!("{}", r.compact); }

        if let Some(path) = out {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() { std::fs::create_dir_all(parent)?; }
            }
            let headers = [s!("handle"), s!("booth")];
            std::fs::write(&path, csv::rows_to_string(Some(&headers[..]), &r.rows(), ','))?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn print_prefs(p: &Preferences) {
    println!("step={}px delay={}ms set={} auto-compare={} show-matches={} copy-link={}",
        p.scroll_step, p.delay_ms, p.sheet_set_index, p.auto_compare, p.show_matches, p.copy_link);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Result<CliArgs, Box<dyn Error>> {
        parse_args(v.iter().map(|s| s.to_string()))
    }

    #[test]
    fn scrape_needs_html() {
        assert!(args(&["scrape"]).is_err());
        let a = args(&["scrape", "--html", "page.html", "--url", "https://x.com/me/following"]).unwrap();
        assert_eq!(
            a.command,
            Command::Scrape { html: PathBuf::from("page.html"), url: Some(s!("https://x.com/me/following")) }
        );
    }

    #[test]
    fn pref_flags_and_globals() {
        let a = args(&["compare", "--set", "2", "--copy-link", "on", "--store", "tmp", "--delay", "300"]).unwrap();
        assert_eq!(a.command, Command::Compare { out: None });
        assert_eq!(a.prefs.set, Some(2));
        assert_eq!(a.prefs.copy_link, Some(true));
        assert_eq!(a.prefs.delay, Some(300));
        assert_eq!(a.store_dir, PathBuf::from("tmp"));
    }

    #[test]
    fn rejects_unknowns() {
        assert!(args(&["dance"]).is_err());
        assert!(args(&["clear", "--bogus"]).is_err());
        assert!(args(&["clear", "extra"]).is_err());
        assert!(args(&["prefs", "--auto-compare", "maybe"]).is_err());
        assert!(args(&[]).is_err());
    }

    #[test]
    fn store_dir_follows_the_flag() {
        let mode = Mode::Cli(args(&["prefs", "--store", "elsewhere"]).unwrap());
        assert_eq!(mode.store_dir(), Path::new("elsewhere"));
        let mode = Mode::Cli(args(&["prefs"]).unwrap());
        assert_eq!(mode.store_dir(), Path::new(STORE_DIR));
        assert_eq!(Mode::Gui.store_dir(), Path::new(STORE_DIR));
    }

    #[test]
    fn flags_apply_with_clamping() {
        let mut p = Preferences::default();
        PrefFlags { step: Some(1), show_matches: Some(false), ..PrefFlags::default() }.apply(&mut p);
        assert_eq!(p.scroll_step, 100);
        assert!(!p.show_matches);
    }
}
