//! Weekly compliance run.
//!
//! The job builds a fresh check configuration on every firing.

use tagwatch_core::ServerConfig;
use tagwatch_pipeline::{run_compliance_check, CheckResponse, EnvLookup};
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive for
/// the lifetime of the process. Dropping it shuts down the job.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised, the
/// cron expression is invalid, or the scheduler fails to start.
pub async fn build_scheduler(
    config: &ServerConfig,
    env: EnvLookup,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    if config.schedule_enabled {
        register_check_job(&scheduler, &config.schedule, env).await?;
        tracing::info!(schedule = %config.schedule, "scheduler: weekly tag check registered");
    } else {
        tracing::info!("scheduler: TAGWATCH_SCHEDULE_ENABLED is false; no job registered");
    }

    scheduler.start().await?;
    Ok(scheduler)
}

/// Registers the compliance run on `schedule` (six-field cron, UTC).
async fn register_check_job(
    scheduler: &JobScheduler,
    schedule: &str,
    env: EnvLookup,
) -> Result<(), JobSchedulerError> {
    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let env = EnvLookup::clone(&env);

        Box::pin(async move {
            tracing::info!("scheduler: starting tag compliance run");
            run_scheduled_check(&env).await;
        })
    })?;

    scheduler.add(job).await?;
    Ok(())
}

/// Runs one check and logs the outcome. Failures never reach the scheduler.
async fn run_scheduled_check(env: &EnvLookup) {
    match run_compliance_check(&**env).await {
        Ok(report) => {
            tracing::info!(
                products = report.products_scanned,
                missing = report.missing.len(),
                "scheduler: {}",
                CheckResponse::summary(&report).message
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "scheduler: tag compliance run failed");
        }
    }
}
