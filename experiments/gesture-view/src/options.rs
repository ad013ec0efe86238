use {
    anyhow::{Result, bail},
    std::path::PathBuf,
};

const DEFAULT_DEVICE: &str = "/dev/video0";

/// Command line options of the gesture viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub device: PathBuf,
    pub frames: Option<PathBuf>,
    pub signal: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub mirror: bool,
    pub headless: bool,
    pub ticks: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_DEVICE),
            frames: None,
            signal: None,
            log_dir: None,
            mirror: true,
            headless: false,
            ticks: None,
        }
    }
}

fn value(flag: &str, next: Option<String>) -> Result<String> {
    match next {
        Some(value) if !value.starts_with("--") => Ok(value),
        _ => bail!("{} needs a value", flag),
    }
}

impl Options {
    /// Parse arguments, not including the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--device" => options.device = value(&arg, args.next())?.into(),
                "--frames" => options.frames = Some(value(&arg, args.next())?.into()),
                "--signal" => options.signal = Some(value(&arg, args.next())?),
                "--log-dir" => options.log_dir = Some(value(&arg, args.next())?.into()),
                "--ticks" => {
                    let ticks = value(&arg, args.next())?;
                    match ticks.parse::<u64>() {
                        Ok(0) => bail!("--ticks must be at least 1"),
                        Ok(ticks) => options.ticks = Some(ticks),
                        Err(_) => bail!("--ticks expects a number, got {:?}", ticks),
                    }
                }
                "--no-mirror" => options.mirror = false,
                "--headless" => options.headless = true,
                other => bail!("unknown argument {:?}", other),
            }
        }
        Ok(options)
    }

    pub fn usage(program: &str) -> String {
        format!(
            "Usage: {} [--device <path>] [--frames <dir>] [--signal <n[,n...]>] \
             [--log-dir <dir>] [--no-mirror] [--headless] [--ticks <n>]",
            program
        )
    }
}
