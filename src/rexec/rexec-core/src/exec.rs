use crate::agc::Agc;
use crate::alarm::Alarm;
use crate::constants::exec::{NUM_CORE_SETS, NUM_VAC_AREAS};
use crate::constants::{lights, ports};
use log::{debug, warn};

/// Job body. Runs to completion on the caller's stack and signals how it
/// gave up the processor through the `Jobs` calls.
pub type JobFn = fn(&mut Agc<'_>);

/// One job slot. Priority 0 is an empty slot, a positive value is ready
/// and a negative value is asleep with its magnitude kept.
#[derive(Clone, Copy)]
struct CoreSet {
    priority: i32,
    entry: Option<JobFn>,
    vac: Option<usize>,
}

impl CoreSet {
    const EMPTY: CoreSet = CoreSet {
        priority: 0,
        entry: None,
        vac: None,
    };

    fn is_empty(&self) -> bool {
        self.priority == 0 && self.entry.is_none()
    }
}

/// Core set and VAC area tables of the cooperative scheduler
pub struct Executive {
    core_sets: [CoreSet; NUM_CORE_SETS],
    vac_areas: [bool; NUM_VAC_AREAS],
    current: Option<usize>,
    newjob: bool,
    job_ended: bool,
}

impl Executive {
    pub fn new() -> Self {
        Executive {
            core_sets: [CoreSet::EMPTY; NUM_CORE_SETS],
            vac_areas: [false; NUM_VAC_AREAS],
            current: None,
            newjob: false,
            job_ended: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Executive::new();
    }

    /// Claims a core set, and a VAC area when asked for one. Nothing is
    /// claimed unless everything needed is free.
    pub fn schedule(&mut self, priority: i32, entry: JobFn, needs_vac: bool) -> Result<usize, Alarm> {
        let priority = if priority <= 0 {
            warn!("Job scheduled with non-positive priority {}, using 1", priority);
            1
        } else {
            priority
        };

        let slot = self
            .core_sets
            .iter()
            .position(CoreSet::is_empty)
            .ok_or(Alarm::NoCoreSet)?;
        let vac = if needs_vac {
            let area = self
                .vac_areas
                .iter()
                .position(|in_use| !in_use)
                .ok_or(Alarm::NoVacArea)?;
            self.vac_areas[area] = true;
            Some(area)
        } else {
            None
        };

        self.core_sets[slot] = CoreSet {
            priority,
            entry: Some(entry),
            vac,
        };
        if self.outranks_current(priority) {
            self.newjob = true;
        }

        debug!(
            "Scheduled job in core set {} (priority 0o{:o}, VAC {:?})",
            slot, priority, vac
        );
        Ok(slot)
    }

    fn outranks_current(&self, priority: i32) -> bool {
        match self.current {
            Some(current) => priority > self.core_sets[current].priority,
            None => false,
        }
    }

    /// Frees the running job's slot and VAC area
    pub fn end_of_job(&mut self) {
        if let Some(current) = self.current.take() {
            if let Some(area) = self.core_sets[current].vac {
                self.vac_areas[area] = false;
            }
            self.core_sets[current] = CoreSet::EMPTY;
            debug!("End of job in core set {}", current);
        }
        self.job_ended = true;
    }

    pub fn change_job(&mut self) {
        self.newjob = false;
        self.job_ended = true;
    }

    pub fn sleep(&mut self) {
        if let Some(current) = self.current {
            let core_set = &mut self.core_sets[current];
            if core_set.priority > 0 {
                core_set.priority = -core_set.priority;
            }
            debug!("Job in core set {} sleeping", current);
        }
        self.job_ended = true;
    }

    pub fn wake(&mut self, slot: usize) {
        let priority = match self.core_sets.get_mut(slot) {
            Some(core_set) if core_set.priority < 0 => {
                core_set.priority = -core_set.priority;
                core_set.priority
            }
            Some(_) => return,
            None => {
                warn!("Wake of invalid core set {}", slot);
                return;
            }
        };

        debug!("Woke job in core set {}", slot);
        if self.outranks_current(priority) {
            self.newjob = true;
        }
    }

    /// Highest ready priority, lowest index on a tie
    fn select(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut best_priority = 0;
        for (idx, core_set) in self.core_sets.iter().enumerate() {
            if core_set.priority > best_priority && core_set.entry.is_some() {
                best_priority = core_set.priority;
                best = Some(idx);
            }
        }
        best
    }

    /// Makes the selected job current and hands back its entry
    fn begin_quantum(&mut self) -> Option<(usize, JobFn)> {
        let best = match self.select() {
            Some(best) => best,
            None => {
                self.current = None;
                return None;
            }
        };
        let entry = self.core_sets[best].entry?;

        self.current = Some(best);
        self.newjob = false;
        self.job_ended = false;
        Some((best, entry))
    }

    fn finish_quantum(&mut self, slot: usize) {
        if !self.job_ended && self.current == Some(slot) {
            self.end_of_job();
        }
    }

    /// Core set of the job given the last quantum. A job that yielded or
    /// slept stays current until the next quantum starts, so ENDOFJOB or an
    /// abort issued between quanta (from a task) empties that core set.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Set when a job outranking the running one became ready
    pub fn newjob(&self) -> bool {
        self.newjob
    }

    pub fn is_idle(&self) -> bool {
        self.select().is_none()
    }

    pub fn priority_of(&self, slot: usize) -> i32 {
        self.core_sets.get(slot).map_or(0, |c| c.priority)
    }

    pub fn vac_of(&self, slot: usize) -> Option<usize> {
        self.core_sets.get(slot).and_then(|c| c.vac)
    }

    pub fn vac_in_use(&self, area: usize) -> bool {
        self.vac_areas.get(area).copied().unwrap_or(false)
    }
}

impl Default for Executive {
    fn default() -> Self {
        Self::new()
    }
}

/// Executive entry points as seen from job and task code
pub trait Jobs {
    fn novac(&mut self, priority: i32, job: JobFn) -> Result<usize, Alarm>;
    fn findvac(&mut self, priority: i32, job: JobFn) -> Result<usize, Alarm>;
    fn end_of_job(&mut self);
    fn change_job(&mut self);
    fn job_sleep(&mut self);
    fn job_wake(&mut self, slot: usize);
    fn run_job(&mut self) -> bool;
}

impl<'a> Jobs for Agc<'a> {
    /// NOVAC: a job without a VAC area
    fn novac(&mut self, priority: i32, job: JobFn) -> Result<usize, Alarm> {
        self.exec.schedule(priority, job, false)
    }

    /// FINDVAC: a job holding a VAC area until it ends
    fn findvac(&mut self, priority: i32, job: JobFn) -> Result<usize, Alarm> {
        self.exec.schedule(priority, job, true)
    }

    /// ENDOFJOB
    fn end_of_job(&mut self) {
        self.exec.end_of_job()
    }

    /// CHANGEJOB
    fn change_job(&mut self) {
        self.exec.change_job()
    }

    /// JOBSLEEP
    fn job_sleep(&mut self) {
        self.exec.sleep()
    }

    /// JOBWAKE
    fn job_wake(&mut self, slot: usize) {
        self.exec.wake(slot)
    }

    /// Runs one quantum of the highest priority ready job. Returns false
    /// when there was nothing to run.
    fn run_job(&mut self) -> bool {
        let (slot, entry) = match self.exec.begin_quantum() {
            Some(job) => job,
            None => {
                self.state
                    .channel_clear_bits(ports::CHANNEL_DSALMOUT, lights::COMP_ACTY);
                return false;
            }
        };

        self.state
            .channel_set_bits(ports::CHANNEL_DSALMOUT, lights::COMP_ACTY);
        entry(self);
        self.exec.finish_quantum(slot);
        true
    }
}

#[cfg(test)]
mod exec_tests {
    use super::*;
    use crate::constants::priority::*;

    fn noop(_agc: &mut Agc<'_>) {}

    fn sleeper(agc: &mut Agc<'_>) {
        agc.job_sleep();
    }

    fn yielder(agc: &mut Agc<'_>) {
        agc.change_job();
    }

    #[test]
    fn test_table_exhaustion() {
        let mut exec = Executive::new();
        for i in 0..NUM_CORE_SETS {
            assert_eq!(exec.schedule(PRIO10, noop, false), Ok(i));
        }
        assert_eq!(exec.schedule(PRIO10, noop, false), Err(Alarm::NoCoreSet));
    }

    #[test]
    fn test_findvac_is_all_or_nothing() {
        let mut exec = Executive::new();
        for area in 0..NUM_VAC_AREAS {
            assert_eq!(exec.schedule(PRIO10, noop, true), Ok(area));
            assert_eq!(exec.vac_of(area), Some(area));
        }
        assert_eq!(exec.schedule(PRIO10, noop, true), Err(Alarm::NoVacArea));
        // The failed request left its core set free
        assert_eq!(exec.priority_of(NUM_VAC_AREAS), 0);
        assert_eq!(exec.schedule(PRIO10, noop, false), Ok(NUM_VAC_AREAS));
    }

    #[test]
    fn test_newjob_reminder() {
        let mut agc = Agc::new();
        agc.novac(PRIO10, noop).unwrap();
        assert!(!agc.exec().newjob());

        agc.exec.begin_quantum();
        agc.novac(PRIO5, noop).unwrap();
        assert!(!agc.exec().newjob());
        agc.novac(PRIO20, noop).unwrap();
        assert!(agc.exec().newjob());

        agc.change_job();
        assert!(!agc.exec().newjob());
    }

    // Puts a job of `priority` to sleep, then starts a PRIO10 quantum
    fn sleeper_under_prio10(priority: i32) -> (Executive, usize) {
        let mut exec = Executive::new();
        let sleeping = exec.schedule(priority, noop, false).unwrap();
        exec.begin_quantum();
        exec.sleep();
        exec.schedule(PRIO10, noop, false).unwrap();
        exec.begin_quantum();
        assert!(!exec.newjob());
        (exec, sleeping)
    }

    #[test]
    fn test_wake_sets_newjob_above_current() {
        let (mut exec, sleeping) = sleeper_under_prio10(PRIO20);
        exec.wake(sleeping);
        assert_eq!(exec.priority_of(sleeping), PRIO20);
        assert!(exec.newjob());
    }

    #[test]
    fn test_wake_below_current_leaves_newjob() {
        let (mut exec, sleeping) = sleeper_under_prio10(PRIO5);
        exec.wake(sleeping);
        assert_eq!(exec.priority_of(sleeping), PRIO5);
        assert!(!exec.newjob());
    }

    #[test]
    fn test_select_ties_lowest_index() {
        let mut exec = Executive::new();
        exec.schedule(PRIO10, noop, false).unwrap();
        exec.schedule(PRIO20, noop, false).unwrap();
        exec.schedule(PRIO20, noop, false).unwrap();
        assert_eq!(exec.select(), Some(1));
    }

    #[test]
    fn test_sleep_and_wake() {
        let mut agc = Agc::new();
        let slot = agc.novac(PRIO14, sleeper).unwrap();

        assert!(agc.run_job());
        assert_eq!(agc.exec().priority_of(slot), -PRIO14);
        assert!(agc.exec().is_idle());
        assert!(!agc.run_job());

        agc.job_wake(slot);
        assert_eq!(agc.exec().priority_of(slot), PRIO14);

        // Waking a ready job changes nothing
        agc.job_wake(slot);
        assert_eq!(agc.exec().priority_of(slot), PRIO14);
        agc.job_wake(NUM_CORE_SETS);
    }

    #[test]
    fn test_auto_end_and_yield() {
        let mut agc = Agc::new();
        let done = agc.findvac(PRIO10, noop).unwrap();
        let kept = agc.novac(PRIO5, yielder).unwrap();

        assert!(agc.run_job());
        assert_eq!(agc.exec().priority_of(done), 0);
        assert!(!agc.exec().vac_in_use(0));
        assert_eq!(agc.exec().current(), None);

        // A yielding job keeps its slot and runs again
        assert!(agc.run_job());
        assert_eq!(agc.exec().current(), Some(kept));
        assert!(agc.run_job());
        assert_eq!(agc.exec().priority_of(kept), PRIO5);
    }

    #[test]
    fn test_comp_acty_light() {
        let mut agc = Agc::new();
        agc.novac(PRIO10, yielder).unwrap();
        agc.run_job();
        assert_ne!(
            agc.state.read_channel(ports::CHANNEL_DSALMOUT) & lights::COMP_ACTY,
            0
        );

        let mut idle = Agc::new();
        idle.state
            .channel_set_bits(ports::CHANNEL_DSALMOUT, lights::COMP_ACTY);
        assert!(!idle.run_job());
        assert_eq!(
            idle.state.read_channel(ports::CHANNEL_DSALMOUT) & lights::COMP_ACTY,
            0
        );
    }

    #[test]
    fn test_non_positive_priority() {
        let mut exec = Executive::new();
        let slot = exec.schedule(0, noop, false).unwrap();
        assert_eq!(exec.priority_of(slot), 1);
    }
}
