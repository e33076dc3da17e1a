#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

/// Optional per-run resource reporting. Disabled instances carry no
/// sysinfo state at all.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: Option<Mutex<System>>,
    pid: Option<Pid>,
    start_time: Instant,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let system =
            enabled.then(|| Mutex::new(System::new_with_specifics(RefreshKind::everything())));
        let pid = if enabled {
            sysinfo::get_current_pid().ok()
        } else {
            None
        };

        Self {
            system,
            pid,
            start_time: Instant::now(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.system.is_some()
    }

    pub fn log_stats(&self, phase: &str) {
        let (Some(system), Some(pid)) = (&self.system, self.pid) else {
            return;
        };
        let Ok(mut system) = system.lock() else {
            return;
        };
        system.refresh_all();
        let Some(process) = system.process(pid) else {
            return;
        };

        let memory_mb = process.memory() / 1024 / 1024;
        tracing::info!(
            "{} - CPU: {:.1}%, Memory: {}MB, Elapsed: {:?}",
            phase,
            process.cpu_usage(),
            memory_mb,
            self.start_time.elapsed()
        );
    }

    pub fn log_final_stats(&self) {
        if self.is_enabled() {
            tracing::info!("total run time: {:?}", self.start_time.elapsed());
        }
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// Empty implementation when the cli feature (and with it sysinfo) is off.
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn is_enabled(&self) -> bool {
        false
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}
}
