use crate::common::*;

#[doc = "Log line format: `[timestamp] [LEVEL] [module:line] message`"]
fn log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args()
    )
}

#[doc = r#"
    Starts the global logger.

    Writes to `logs/` with a new file every day (ten files kept) and mirrors
    `Info` and above to stdout. `RUST_LOG` overrides the default `info` level.
    The returned handle must be kept alive for the whole run.
"#]
pub fn set_global_logger() -> anyhow::Result<LoggerHandle> {
    let log_directory: &str = "logs";

    let handle: LoggerHandle = Logger::try_with_env_or_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(log_directory)
                .basename("sources_count"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(log_format)
        .format_for_stdout(log_format)
        .duplicate_to_stdout(Duplicate::Info)
        .start()?;

    Ok(handle)
}
