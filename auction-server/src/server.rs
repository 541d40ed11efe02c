use {
    crate::{
        auction::service::{
            self,
            Service,
        },
        config::{
            Config,
            RunOptions,
        },
        kernel::time::SystemTimeSource,
    },
    anyhow::anyhow,
    sqlx::postgres::PgPoolOptions,
    std::{
        sync::{
            atomic::{
                AtomicBool,
                Ordering,
            },
            Arc,
        },
        time::Duration,
    },
    tokio_util::task::TaskTracker,
};

const DATABASE_MAX_CONNECTIONS: u32 = 10;

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    tokio::spawn(async move {
        tracing::info!("Registered shutdown signal handler...");
        tokio::signal::ctrl_c().await.unwrap();
        tracing::info!("Shut down signal received, waiting for tasks...");
        SHOULD_EXIT.store(true, Ordering::Release);
    });

    let config = Config::load(&run_options.config.config).map_err(|err| {
        anyhow!(
            "Failed to load config from file({path}): {:?}",
            err,
            path = run_options.config.config
        )
    })?;

    let pool = PgPoolOptions::new()
        .max_connections(DATABASE_MAX_CONNECTIONS)
        .connect(&run_options.server.database_url)
        .await
        .map_err(|err| anyhow!("Failed to connect to database: {:?}", err))?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let task_tracker = TaskTracker::new();
    let service = Service::new(
        Arc::new(pool),
        service::Config {
            auction_duration: config.auction_duration,
            sweep_interval:   config.sweep_interval,
        },
        Arc::new(SystemTimeSource),
        task_tracker.clone(),
    );

    let sweep_loop = tokio::spawn({
        let service = service.clone();
        async move { service.run_sweep_loop().await }
    });
    if let Err(err) = sweep_loop.await? {
        tracing::error!(error = ?err, "Sweep loop exited with error");
    }

    // Let in-flight closes finish so every auction lands in a consistent
    // persisted status before the process exits.
    task_tracker.close();
    task_tracker.wait().await;
    Ok(())
}

// A static exit flag to indicate to running threads that we're shutting down. This is used to
// gracefully shutdown the application.
//
// NOTE: A more idiomatic approach would be to use a tokio::sync::broadcast channel, and to send a
// shutdown signal to all running tasks. However, this is a bit more complicated to implement and
// we don't rely on global state for anything else.
pub(crate) static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);
pub const EXIT_CHECK_INTERVAL: Duration = Duration::from_secs(1);
