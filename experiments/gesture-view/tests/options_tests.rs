use gesture_view::Options;
use std::path::PathBuf;

fn parse(args: &[&str]) -> anyhow::Result<Options> {
    Options::parse(args.iter().map(|s| s.to_string()))
}

#[test]
fn test_defaults() {
    let options = parse(&[]).unwrap();
    assert_eq!(options, Options::default());
    assert_eq!(options.device, PathBuf::from("/dev/video0"));
    assert!(options.mirror);
    assert!(!options.headless);
}

#[test]
fn test_all_flags() {
    let options = parse(&[
        "--device",
        "/dev/video2",
        "--frames",
        "stills",
        "--signal",
        "1,2,5",
        "--log-dir",
        "logs",
        "--no-mirror",
        "--headless",
        "--ticks",
        "90",
    ])
    .unwrap();

    assert_eq!(options.device, PathBuf::from("/dev/video2"));
    assert_eq!(options.frames, Some(PathBuf::from("stills")));
    assert_eq!(options.signal.as_deref(), Some("1,2,5"));
    assert_eq!(options.log_dir, Some(PathBuf::from("logs")));
    assert!(!options.mirror);
    assert!(options.headless);
    assert_eq!(options.ticks, Some(90));
}

#[test]
fn test_missing_value() {
    let err = parse(&["--frames"]).unwrap_err();
    assert!(err.to_string().contains("--frames"));

    assert!(parse(&["--device", "--headless"]).is_err());
}

#[test]
fn test_rejects_unknown_and_bad_numbers() {
    assert!(parse(&["--fullscreen"]).is_err());
    assert!(parse(&["--ticks", "many"]).is_err());
}

#[test]
fn test_rejects_zero_ticks() {
    let err = parse(&["--headless", "--ticks", "0"]).unwrap_err();
    assert!(err.to_string().contains("at least 1"));
    assert_eq!(parse(&["--ticks", "1"]).unwrap().ticks, Some(1));
}
