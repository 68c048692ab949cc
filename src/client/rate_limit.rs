//! Reactive request pacing per service
//!
//! Pacing only activates after a service has returned a throttling response.
//! Until then requests go out unthrottled.

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, Ordering};

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;

/// Services this tool talks to, each with its own pacing rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    /// AWS Organizations control plane (global, served from one region)
    Organizations,
    /// IAM Identity Center admin API (regional)
    IdentityCenter,
}

impl ServiceCategory {
    /// Name used for request signing and in log messages.
    pub fn signing_name(&self) -> &'static str {
        match self {
            ServiceCategory::Organizations => "organizations",
            ServiceCategory::IdentityCenter => "sso",
        }
    }

    /// JSON protocol target prefix for the `X-Amz-Target` header.
    pub fn target_prefix(&self) -> &'static str {
        match self {
            ServiceCategory::Organizations => "AWSOrganizationsV20161128",
            ServiceCategory::IdentityCenter => "SWBExternalService",
        }
    }

    /// Requests per second once pacing is active.
    pub fn pacing_rate(&self) -> u32 {
        match self {
            ServiceCategory::Organizations => 5,
            ServiceCategory::IdentityCenter => 10,
        }
    }
}

/// Rate limiter for one service client.
pub struct ThrottleLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    active: AtomicBool,
    category: ServiceCategory,
}

impl ThrottleLimiter {
    /// Create an inactive limiter for a service.
    pub fn new(category: ServiceCategory) -> Self {
        let quota = Quota::per_second(
            NonZeroU32::new(category.pacing_rate()).unwrap_or(NonZeroU32::MIN),
        );

        Self {
            limiter: RateLimiter::direct(quota),
            active: AtomicBool::new(false),
            category,
        }
    }

    /// Start pacing requests (called on a throttling response).
    pub fn activate(&self) {
        let was_active = self.active.swap(true, Ordering::SeqCst);
        if !was_active {
            debug!("Request pacing activated for {:?}", self.category);
        }
    }

    /// Check if pacing is active.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Wait for permission if pacing is active.
    pub async fn wait_if_active(&self) {
        if self.is_active() {
            debug!("Waiting for rate limiter {:?}", self.category);
            self.limiter.until_ready().await;
        }
    }
}
