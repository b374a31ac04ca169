/// Log the start of a submission
#[macro_export]
macro_rules! log_submission_entry {
    ($ctx:expr, $name:expr) => {
        log::debug!("{} -> submit '{}'", $ctx.log_prefix(), $name);
    };
}

/// Log the aggregate result of a submission with its duration
#[macro_export]
macro_rules! log_submission_exit {
    ($ctx:expr, $result:expr) => {
        match &$result {
            Ok(outcome) => log::info!(
                "{} <- {} project={} failed_links={} ({}ms)",
                $ctx.log_prefix(),
                if outcome.is_complete() { "created" } else { "partially_created" },
                outcome.project_id(),
                outcome.failed_urls().len(),
                $ctx.elapsed_ms()
            ),
            Err(e) => log::warn!(
                "{} <- {} {} ({}ms)",
                $ctx.log_prefix(),
                e.error_code(),
                e,
                $ctx.elapsed_ms()
            ),
        }
    };
}
