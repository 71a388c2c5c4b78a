use rexec_core::constants::exec::{NUM_CORE_SETS, NUM_VAC_AREAS, NUM_WAITLIST_TASKS};
use rexec_core::constants::priority::{PRIO10, PRIO20, PRIO30};
use rexec_core::constants::timers::{TIME1, TIME2};
use rexec_core::{Agc, Alarm, Interrupt, Jobs, Tasks};

// Scratch words the jobs and tasks below record into
const LOG_BANK: usize = 2;
const LOG_LEN: usize = 0;

fn record(agc: &mut Agc<'_>, tag: i16) {
    let len = agc.state.read_erasable(LOG_BANK, LOG_LEN);
    agc.state.write_erasable(LOG_BANK, 1 + len as usize, tag);
    agc.state.write_erasable(LOG_BANK, LOG_LEN, len + 1);
}

fn recorded(agc: &Agc<'_>) -> Vec<i16> {
    let len = agc.state.read_erasable(LOG_BANK, LOG_LEN) as usize;
    (1..=len)
        .map(|i| agc.state.read_erasable(LOG_BANK, i))
        .collect()
}

fn noop(_agc: &mut Agc<'_>) {}

fn job_a(agc: &mut Agc<'_>) {
    record(agc, 10);
}

fn job_b(agc: &mut Agc<'_>) {
    record(agc, 20);
}

fn task_a(agc: &mut Agc<'_>) {
    record(agc, 1);
}

fn task_b(agc: &mut Agc<'_>) {
    record(agc, 2);
}

fn task_c(agc: &mut Agc<'_>) {
    record(agc, 3);
}

fn sleepy_job(agc: &mut Agc<'_>) {
    record(agc, 7);
    agc.job_sleep();
}

fn task_ends_job(agc: &mut Agc<'_>) {
    agc.end_of_job();
}

fn task_schedules_job(agc: &mut Agc<'_>) {
    record(agc, 4);
    agc.novac(PRIO30, job_a).unwrap();
}

#[test]
fn eighth_job_is_rejected_until_a_slot_frees() {
    let mut agc = Agc::new();
    for i in 0..NUM_CORE_SETS {
        assert_eq!(agc.novac(PRIO10, noop), Ok(i));
    }
    assert_eq!(agc.novac(PRIO10, noop), Err(Alarm::NoCoreSet));

    assert!(agc.run_job());
    assert_eq!(agc.novac(PRIO10, noop), Ok(0));
}

#[test]
fn findvac_rejection_releases_nothing() {
    let mut agc = Agc::new();
    for _ in 0..NUM_VAC_AREAS {
        agc.findvac(PRIO10, noop).unwrap();
    }
    assert_eq!(agc.findvac(PRIO20, noop), Err(Alarm::NoVacArea));
    assert_eq!(agc.exec().priority_of(NUM_VAC_AREAS), 0);
    assert!((0..NUM_VAC_AREAS).all(|area| agc.exec().vac_in_use(area)));

    // Ending one job frees its area for the next FINDVAC
    assert!(agc.run_job());
    assert_eq!(agc.findvac(PRIO20, noop), Ok(0));
    assert_eq!(agc.exec().vac_of(0), Some(0));
}

#[test]
fn higher_priority_runs_first() {
    let mut agc = Agc::new();
    agc.novac(PRIO10, job_a).unwrap();
    agc.novac(PRIO20, job_b).unwrap();

    while agc.run_job() {}
    assert_eq!(recorded(&agc), vec![20, 10]);
    assert!(agc.exec().is_idle());
}

#[test]
fn sleep_and_wake_preserve_priority() {
    let mut agc = Agc::new();
    let slot = agc.novac(PRIO20, sleepy_job).unwrap();

    for round in 1..=3 {
        assert!(agc.run_job());
        assert_eq!(agc.exec().priority_of(slot), -PRIO20);
        assert!(!agc.run_job());

        agc.job_wake(slot);
        assert_eq!(agc.exec().priority_of(slot), PRIO20);
        assert_eq!(recorded(&agc).len(), round);
    }
}

#[test]
fn zero_delay_fires_on_next_tick() {
    let mut agc = Agc::new();
    agc.waitlist(0, task_a).unwrap();
    agc.tick();
    assert_eq!(recorded(&agc), vec![1]);
    assert_eq!(agc.waitlist_table().occupied(), 0);
}

#[test]
fn same_tick_tasks_run_in_slot_order() {
    let mut agc = Agc::new();
    agc.waitlist(5, task_c).unwrap();
    agc.waitlist(3, task_b).unwrap();
    agc.waitlist(3, task_a).unwrap();
    agc.waitlist(5, task_b).unwrap();

    for _ in 0..3 {
        agc.tick();
    }
    assert_eq!(recorded(&agc), vec![2, 1]);

    for _ in 0..2 {
        agc.tick();
    }
    assert_eq!(recorded(&agc), vec![2, 1, 3, 2]);
}

#[test]
fn waitlist_overflow_is_reported() {
    let mut agc = Agc::new();
    for _ in 0..NUM_WAITLIST_TASKS {
        agc.waitlist(50, noop).unwrap();
    }
    assert_eq!(agc.waitlist(50, noop), Err(Alarm::WaitlistOverflow));
}

#[test]
fn longcall_fires_once_at_full_delay() {
    let mut agc = Agc::new();
    agc.longcall(20000, task_a).unwrap();

    for _ in 0..19999 {
        agc.tick();
    }
    assert!(recorded(&agc).is_empty());
    assert_eq!(agc.waitlist_table().occupied(), 1);

    agc.tick();
    assert_eq!(recorded(&agc), vec![1]);

    for _ in 0..20000 {
        agc.tick();
    }
    assert_eq!(recorded(&agc), vec![1]);
    assert_eq!(agc.waitlist_table().occupied(), 0);
}

#[test]
fn several_longcalls_in_flight() {
    let mut agc = Agc::new();
    agc.longcall(17000, task_a).unwrap();
    agc.longcall(33000, task_b).unwrap();

    for _ in 0..33000 {
        agc.tick();
    }
    assert_eq!(recorded(&agc), vec![1, 2]);
}

#[test]
fn elapsed_time_carries_and_ignores_inhibit() {
    let mut agc = Agc::new();
    agc.state.inhint();
    for _ in 0..16384 {
        agc.tick();
    }
    assert_eq!(agc.state.read_timer(TIME1), 0);
    assert_eq!(agc.state.read_timer(TIME2), 1);
    assert!(agc.state.is_inhibited());
}

#[test]
fn inhibit_holds_back_waitlist() {
    let mut agc = Agc::new();
    agc.waitlist(2, task_a).unwrap();
    agc.state.inhint();
    for _ in 0..10 {
        agc.tick();
    }
    assert!(recorded(&agc).is_empty());
    assert_eq!(agc.waitlist_table().remaining(0), 2);

    agc.state.relint();
    agc.tick();
    agc.tick();
    assert_eq!(recorded(&agc), vec![1]);
}

#[test]
fn task_hands_work_to_the_executive() {
    let mut agc = Agc::new();
    agc.waitlist(3, task_schedules_job).unwrap();

    for _ in 0..2 {
        assert!(!agc.step());
    }
    // Third step: the task fires in the tick, its job runs in the same pass
    assert!(agc.step());
    assert_eq!(recorded(&agc), vec![4, 10]);
}

#[test]
fn end_of_job_between_quanta_hits_last_current() {
    let mut agc = Agc::new();
    let slot = agc.novac(PRIO20, sleepy_job).unwrap();
    assert!(agc.run_job());

    // The sleeper is still current until another quantum starts
    assert_eq!(agc.exec().current(), Some(slot));
    agc.waitlist(1, task_ends_job).unwrap();
    agc.tick();

    assert_eq!(agc.exec().current(), None);
    assert_eq!(agc.exec().priority_of(slot), 0);
    agc.job_wake(slot);
    assert!(!agc.run_job());
}
