//! Scripted progress for the simulated analysis and migration phases.
//!
//! No work happens while progress is shown. The schedule is a fixed list of
//! snapshots; the caller is the single timer that waits out each delay.

use std::time::Duration;

/// Width of the rendered bar in cells.
const BAR_WIDTH: usize = 20;

/// A simulated phase of a migration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pattern detection, 10% per 150 ms.
    Analyzing,
    /// Conversion, 5% per 100 ms.
    Migrating,
}

impl Phase {
    /// Heading shown while the phase runs.
    pub const fn label(self) -> &'static str {
        return match self {
            Phase::Analyzing => "Analyzing Code...",
            Phase::Migrating => "Converting Code...",
        };
    }

    /// Percent gained per snapshot.
    const fn step(self) -> u8 {
        return match self {
            Phase::Analyzing => 10,
            Phase::Migrating => 5,
        };
    }

    /// Wait before each snapshot.
    const fn tick(self) -> Duration {
        return match self {
            Phase::Analyzing => Duration::from_millis(150),
            Phase::Migrating => Duration::from_millis(100),
        };
    }
}

/// One state of the progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// How long to wait before showing this snapshot.
    pub delay: Duration,
    /// Completion of the phase, 0..=100.
    pub percent: u8,
    /// The phase being shown.
    pub phase: Phase,
}

/// Render a fixed-width bar such as `[##########----------]  50%`.
pub fn bar(percent: u8) -> String {
    let clamped = usize::from(percent.min(100));
    let filled = clamped.saturating_mul(BAR_WIDTH) / 100;
    let empty = BAR_WIDTH.saturating_sub(filled);
    return format!("[{}{}] {clamped:>3}%", "#".repeat(filled), "-".repeat(empty));
}

/// Snapshots for one phase: 0% up to 100% in the phase's step size.
pub fn phase_schedule(phase: Phase) -> impl Iterator<Item = ProgressSnapshot> + Clone {
    return (0..=100_u8).step_by(usize::from(phase.step())).map(move |percent| {
        return ProgressSnapshot {
            delay: phase.tick(),
            percent,
            phase,
        };
    });
}

/// The full run: analysis followed by migration.
pub fn schedule() -> impl Iterator<Item = ProgressSnapshot> + Clone {
    return phase_schedule(Phase::Analyzing).chain(phase_schedule(Phase::Migrating));
}

/// Scale a delay by `speed`; `0.0` removes it. Saturates at `Duration::MAX`.
pub fn scaled(delay: Duration, speed: f64) -> Duration {
    if speed <= 0.0 || !speed.is_finite() {
        return Duration::ZERO;
    }
    return Duration::try_from_secs_f64(delay.as_secs_f64() * speed).unwrap_or(Duration::MAX);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_counts_by_ten() {
        let percents: Vec<u8> = phase_schedule(Phase::Analyzing).map(|s| s.percent).collect();
        assert_eq!(percents, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn migration_counts_by_five() {
        let snapshots: Vec<ProgressSnapshot> = phase_schedule(Phase::Migrating).collect();
        assert_eq!(snapshots.len(), 21);
        assert_eq!(snapshots.last().map(|s| s.percent), Some(100));
        assert!(snapshots.iter().all(|s| s.delay == Duration::from_millis(100)));
    }

    #[test]
    fn full_run_sums_every_tick() {
        let total: Duration = schedule().map(|s| s.delay).sum();
        assert_eq!(total, Duration::from_millis(11 * 150 + 21 * 100));
    }

    #[test]
    fn phases_never_interleave() {
        let phases: Vec<Phase> = schedule().map(|s| s.phase).collect();
        let switch = phases.iter().position(|p| *p == Phase::Migrating).unwrap();
        assert!(phases[..switch].iter().all(|p| *p == Phase::Analyzing));
        assert!(phases[switch..].iter().all(|p| *p == Phase::Migrating));
    }

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(0), "[--------------------]   0%");
        assert_eq!(bar(50), "[##########----------]  50%");
        assert_eq!(bar(100), "[####################] 100%");
    }

    #[test]
    fn zero_speed_skips_waiting() {
        assert_eq!(scaled(Duration::from_millis(150), 0.0), Duration::ZERO);
        assert_eq!(scaled(Duration::from_millis(100), 0.5), Duration::from_millis(50));
    }

    #[test]
    fn huge_speed_saturates() {
        assert_eq!(scaled(Duration::from_millis(150), 1e30), Duration::MAX);
        assert_eq!(scaled(Duration::from_millis(150), f64::INFINITY), Duration::ZERO);
    }
}
