use crate::agc::Agc;
use crate::alarm::Alarm;
use crate::constants::exec::{MAX_DELAY, NUM_WAITLIST_TASKS};
use log::debug;

/// Waitlist task. Tasks run inside the timer interrupt and must be short:
/// anything lengthy belongs in a job scheduled from the task.
pub type TaskFn = fn(&mut Agc<'_>);

/// What a slot does when its countdown expires
#[derive(Clone, Copy)]
enum WaitEntry {
    Call(TaskFn),
    // LONGCALL segment: re-arm for `remaining` more ticks, then call `target`
    Chain { target: TaskFn, remaining: i32 },
}

#[derive(Clone, Copy)]
struct WaitSlot {
    remaining: i32,
    entry: Option<WaitEntry>,
}

impl WaitSlot {
    const EMPTY: WaitSlot = WaitSlot {
        remaining: 0,
        entry: None,
    };
}

/// Nine deferred tasks counted down in centiseconds. Each long delay keeps
/// its chain state in its own slot, so any number of LONGCALLs can be in
/// flight up to the table size.
pub struct WaitList {
    slots: [WaitSlot; NUM_WAITLIST_TASKS],
}

impl WaitList {
    pub fn new() -> Self {
        WaitList {
            slots: [WaitSlot::EMPTY; NUM_WAITLIST_TASKS],
        }
    }

    pub fn reset(&mut self) {
        self.slots = [WaitSlot::EMPTY; NUM_WAITLIST_TASKS];
    }

    fn insert(&mut self, delay: i32, entry: WaitEntry) -> Result<usize, Alarm> {
        let delay = delay.max(1);
        let slot = self
            .slots
            .iter()
            .position(|s| s.entry.is_none())
            .ok_or(Alarm::WaitlistOverflow)?;

        self.slots[slot] = WaitSlot {
            remaining: delay,
            entry: Some(entry),
        };
        debug!("Waitlist slot {} armed for {} cs", slot, delay);
        Ok(slot)
    }

    pub fn add(&mut self, delay: i32, task: TaskFn) -> Result<usize, Alarm> {
        self.insert(delay, WaitEntry::Call(task))
    }

    /// Delays past the longest single countdown are split into full
    /// segments followed by the remainder.
    pub fn longcall(&mut self, delay: i32, task: TaskFn) -> Result<usize, Alarm> {
        let (delay, entry) = Self::segment(delay, task);
        self.insert(delay, entry)
    }

    // Next countdown and entry of a LONGCALL with `delay` ticks to go
    fn segment(delay: i32, target: TaskFn) -> (i32, WaitEntry) {
        if delay <= MAX_DELAY {
            return (delay, WaitEntry::Call(target));
        }
        let chain = WaitEntry::Chain {
            target,
            remaining: delay - MAX_DELAY,
        };
        (MAX_DELAY, chain)
    }

    /// Counts one slot down a tick. Once it expires the slot is emptied and
    /// its task handed back, except for a LONGCALL segment, which re-arms
    /// the same slot for the rest of its delay.
    fn count_down(&mut self, slot: usize) -> Option<TaskFn> {
        let wait_slot = &mut self.slots[slot];
        wait_slot.entry?;

        wait_slot.remaining -= 1;
        if wait_slot.remaining > 0 {
            return None;
        }
        wait_slot.remaining = 0;
        match wait_slot.entry.take()? {
            WaitEntry::Call(task) => Some(task),
            WaitEntry::Chain { target, remaining } => {
                let (delay, entry) = Self::segment(remaining, target);
                *wait_slot = WaitSlot {
                    remaining: delay,
                    entry: Some(entry),
                };
                debug!("LONGCALL in slot {} re-armed for {} cs", slot, delay);
                None
            }
        }
    }

    /// Ticks left before the slot fires, 0 when empty
    pub fn remaining(&self, slot: usize) -> i32 {
        match self.slots.get(slot) {
            Some(s) if s.entry.is_some() => s.remaining,
            _ => 0,
        }
    }

    pub fn is_occupied(&self, slot: usize) -> bool {
        self.slots.get(slot).map_or(false, |s| s.entry.is_some())
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.entry.is_some()).count()
    }
}

impl Default for WaitList {
    fn default() -> Self {
        Self::new()
    }
}

/// Waitlist entry points as seen from job and task code
pub trait Tasks {
    fn waitlist(&mut self, delay: i32, task: TaskFn) -> Result<usize, Alarm>;
    fn fixdelay(&mut self, delay: i32, task: TaskFn) -> Result<usize, Alarm>;
    fn longcall(&mut self, delay: i32, task: TaskFn) -> Result<usize, Alarm>;
    fn dispatch_waitlist(&mut self);
}

impl<'a> Tasks for Agc<'a> {
    /// WAITLIST: call `task` after `delay` centiseconds (at least one)
    fn waitlist(&mut self, delay: i32, task: TaskFn) -> Result<usize, Alarm> {
        self.waitlist.add(delay, task)
    }

    /// FIXDELAY: re-arm from inside a task
    fn fixdelay(&mut self, delay: i32, task: TaskFn) -> Result<usize, Alarm> {
        self.waitlist.add(delay, task)
    }

    /// LONGCALL
    fn longcall(&mut self, delay: i32, task: TaskFn) -> Result<usize, Alarm> {
        self.waitlist.longcall(delay, task)
    }

    /// T3RUPT body. Slots are serviced in ascending order, each expired
    /// task running to completion before the next slot is looked at.
    /// Only entries armed before this pass are counted down, so a task
    /// scheduled from inside the pass waits at least one full tick.
    fn dispatch_waitlist(&mut self) {
        let mut armed = [false; NUM_WAITLIST_TASKS];
        for (slot, flag) in armed.iter_mut().enumerate() {
            *flag = self.waitlist.is_occupied(slot);
        }

        for slot in 0..NUM_WAITLIST_TASKS {
            if !armed[slot] {
                continue;
            }
            if let Some(task) = self.waitlist.count_down(slot) {
                task(self);
            }
        }
    }
}
