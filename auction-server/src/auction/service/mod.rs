use {
    super::repository::{
        Database,
        Repository,
    },
    crate::kernel::time::TimeSource,
    std::{
        sync::Arc,
        time::Duration,
    },
    tokio_util::task::TaskTracker,
};

pub mod close_auction;
pub mod close_expired_auctions;
pub mod create_auction;
pub mod get_auction;
pub mod get_auction_status;
pub mod get_bids;
pub mod get_winning_bid;
pub mod submit_bid;
pub mod workers;

/// Process-wide auction timing parameters. Deployment configuration; neither
/// value changes at runtime.
#[derive(Clone, Debug)]
pub struct Config {
    pub auction_duration: Duration,
    pub sweep_interval:   Duration,
}

pub struct ServiceInner {
    config:       Config,
    repo:         Arc<Repository>,
    time_source:  Arc<dyn TimeSource>,
    task_tracker: TaskTracker,
}

#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(
        db: Arc<dyn Database>,
        config: Config,
        time_source: Arc<dyn TimeSource>,
        task_tracker: TaskTracker,
    ) -> Self {
        Self(Arc::new(ServiceInner {
            config,
            repo: Arc::new(Repository::new(db)),
            time_source,
            task_tracker,
        }))
    }
}
