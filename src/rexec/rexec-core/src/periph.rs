use crate::memory::MachineState;

/// Presentation side of the DSKY. Called from T4RUPT with read access to
/// the relay words, lights, flagwords and display slots.
pub trait DisplayPeriph {
    fn scan(&mut self, state: &MachineState);
}
