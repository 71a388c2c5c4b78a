// Size and count of erasable memory banks (E-banks)
pub const MEMORY_SEGMENTS: usize = 8;
pub const MEMORY_SEGMENT_SIZE: usize = 256;

// I/O channel words, flagwords and timer registers
pub const NUM_CHANNELS: usize = 256;
pub const NUM_FLAGWORDS: usize = 12;
pub const NUM_TIMERS: usize = 6;

pub mod word {
    // 15-bit + sign magnitude limits of a single precision word
    pub const POSMAX: i16 = 0o37777;
    pub const NEGMAX: i16 = -0o37777;
    // End-around carry span: a full turn of the 1's complement wheel
    pub const WRAP: i32 = 0o77777;

    // Half-turn angle scaling: 0o40000 is PI, 0o20000 is PI/2
    pub const HALF: i32 = 0o40000;
    pub const QUARTER: i32 = 0o20000;

    // 14 fraction bits carried by the low word of a DP pair
    pub const LOW_BITS: u32 = 14;
    pub const LOW_MASK: i32 = 0o37777;

    // Largest DP magnitude produced by multiply/divide
    pub const DP_MAX: i32 = 0x1FFF_FFFF;
}

pub mod bits {
    // Bit table from the fixed-fixed constant pool
    pub const BIT1: u16 = 0x0001;
    pub const BIT2: u16 = 0x0002;
    pub const BIT3: u16 = 0x0004;
    pub const BIT4: u16 = 0x0008;
    pub const BIT5: u16 = 0x0010;
    pub const BIT6: u16 = 0x0020;
    pub const BIT7: u16 = 0x0040;
    pub const BIT8: u16 = 0x0080;
    pub const BIT9: u16 = 0x0100;
    pub const BIT10: u16 = 0x0200;
    pub const BIT11: u16 = 0x0400;
    pub const BIT12: u16 = 0x0800;
    pub const BIT13: u16 = 0x1000;
    pub const BIT14: u16 = 0x2000;
    pub const BIT15: u16 = 0x4000;
}

pub mod ports {
    // Channel constants (I/O port identifiers)
    pub const CHANNEL_L: usize = 0o01;
    pub const CHANNEL_Q: usize = 0o02;
    pub const CHANNEL_HISCALAR: usize = 0o03;
    pub const CHANNEL_LOSCALAR: usize = 0o04;
    pub const CHANNEL_PYJETS: usize = 0o05;
    pub const CHANNEL_ROLLJETS: usize = 0o06;
    pub const CHANNEL_SUPERBNK: usize = 0o07;
    pub const CHANNEL_OUT0: usize = 0o10; // DSKY relay words
    pub const CHANNEL_DSALMOUT: usize = 0o11; // DSKY status lights
    pub const CHANNEL_CHAN12: usize = 0o12;
    pub const CHANNEL_CHAN13: usize = 0o13;
    pub const CHANNEL_CHAN14: usize = 0o14;
    pub const CHANNEL_MNKEYIN: usize = 0o15; // Main DSKY keyboard
    pub const CHANNEL_NAVKEYIN: usize = 0o16; // Nav DSKY keyboard

    // Extended channels
    pub const CHANNEL_CHAN30: usize = 0o30;
    pub const CHANNEL_CHAN31: usize = 0o31;
    pub const CHANNEL_CHAN32: usize = 0o32;
    pub const CHANNEL_CHAN33: usize = 0o33;
    pub const CHANNEL_CHAN34: usize = 0o34;
    pub const CHANNEL_CHAN77: usize = 0o77;

    // Power-up pattern loaded into channels 30-33 (no warnings, standby off)
    pub const POWER_UP_PATTERN: u16 = 0o37777;
}

pub mod keys {
    // MNKEYIN (channel 15) key codes
    pub const KEY_0: u16 = 0o20;
    pub const KEY_1: u16 = 0o01;
    pub const KEY_2: u16 = 0o02;
    pub const KEY_3: u16 = 0o03;
    pub const KEY_4: u16 = 0o04;
    pub const KEY_5: u16 = 0o05;
    pub const KEY_6: u16 = 0o06;
    pub const KEY_7: u16 = 0o07;
    pub const KEY_8: u16 = 0o10;
    pub const KEY_9: u16 = 0o11;
    pub const KEY_VERB: u16 = 0o21;
    pub const KEY_RSET: u16 = 0o22;
    pub const KEY_KREL: u16 = 0o31;
    pub const KEY_PLUS: u16 = 0o32;
    pub const KEY_MINUS: u16 = 0o33;
    pub const KEY_ENTR: u16 = 0o34;
    pub const KEY_CLR: u16 = 0o36;
    pub const KEY_NOUN: u16 = 0o37;
}

pub mod lights {
    use super::bits::*;

    // DSALMOUT (channel 11) status lamps
    pub const COMP_ACTY: u16 = BIT1;
    pub const UPLINK_ACTY: u16 = BIT2;
    pub const TEMP: u16 = BIT4;
    pub const KEY_REL: u16 = BIT5;
    pub const VEL: u16 = BIT6;
    pub const NO_ATT: u16 = BIT7;
    pub const ALT: u16 = BIT8;
    pub const GIMBAL_LOCK: u16 = BIT9;
    pub const TRACKER: u16 = BIT10;
    pub const PROG: u16 = BIT11;
    pub const OPR_ERR: u16 = BIT12;
    pub const STBY: u16 = BIT13;
    pub const RESTART: u16 = BIT14;
}

pub mod flags {
    use super::bits::*;

    // FLAGWRD0
    pub const FLAGWRD0: usize = 0;
    pub const FREEFLAG: u16 = BIT1;
    pub const DPTS_FLG: u16 = BIT2;
    pub const NODOV37: u16 = BIT3;
    pub const OW0FLAG: u16 = BIT4;
    pub const ENGOFLAG: u16 = BIT5;
    pub const AXISFLG3: u16 = BIT6;
    pub const NODO37FL: u16 = BIT7;
    pub const TFFSW: u16 = BIT8;

    // FLAGWRD1
    pub const FLAGWRD1: usize = 1;
    pub const TRACKFLG: u16 = BIT1;
    pub const UPDTEFLAG: u16 = BIT2;
    pub const RENTEFLAG: u16 = BIT3;
    pub const AVEMIDSW: u16 = BIT4;
    pub const RNDVZFLG: u16 = BIT5;

    // FLAGWRD2
    pub const FLAGWRD2: usize = 2;
    pub const LUNTEFLAG: u16 = BIT1;
    pub const STTEFLAG: u16 = BIT2;
    pub const MIDFLAG: u16 = BIT3;
    pub const SURTEFLAG: u16 = BIT4;

    // FLAGWRD3
    pub const FLAGWRD3: usize = 3;
    pub const VINTFLAG: u16 = BIT1;
    pub const INTYPFLG: u16 = BIT2;
    pub const D6OR9FLG: u16 = BIT3;
    pub const DIM0FLAG: u16 = BIT4;

    // FLAGWRD5
    pub const FLAGWRD5: usize = 5;
    pub const DSKYFLAG: u16 = BIT1;
    pub const XDSPFLAG: u16 = BIT2;
    pub const R1D1EXEC: u16 = BIT3;

    // FLAGWRD7
    pub const FLAGWRD7: usize = 7;
    pub const V37FLAG: u16 = BIT1;
}

pub mod erasable {
    // Display hand-off slots written by R30 and read by noun 44
    pub const DISPLAY_BANK: usize = 5;
    pub const APOGEE_NM: usize = 0;
    pub const PERIGEE_NM: usize = 1;
    pub const TFF_MINUTES: usize = 2;
}

pub mod exec {
    // Executive table sizes
    pub const NUM_CORE_SETS: usize = 7;
    pub const NUM_VAC_AREAS: usize = 5;
    pub const VAC_AREA_SIZE: usize = 43;

    // Waitlist table size and longest single countdown
    pub const NUM_WAITLIST_TASKS: usize = 9;
    pub const MAX_DELAY: i32 = 0o37777;
}

pub mod priority {
    // Job priorities from the fixed-fixed constant pool
    pub const PRIO1: i32 = 0o1000;
    pub const PRIO2: i32 = 0o2000;
    pub const PRIO3: i32 = 0o1400;
    pub const PRIO5: i32 = 0o2400;
    pub const PRIO6: i32 = 0o3000;
    pub const PRIO7: i32 = 0o3400;
    pub const PRIO10: i32 = 0o10000;
    pub const PRIO11: i32 = 0o4400;
    pub const PRIO12: i32 = 0o5000;
    pub const PRIO13: i32 = 0o5400;
    pub const PRIO14: i32 = 0o6000;
    pub const PRIO15: i32 = 0o6400;
    pub const PRIO16: i32 = 0o7000;
    pub const PRIO17: i32 = 0o7400;
    pub const PRIO20: i32 = 0o20000;
    pub const PRIO21: i32 = 0o10400;
    pub const PRIO22: i32 = 0o11000;
    pub const PRIO23: i32 = 0o11400;
    pub const PRIO24: i32 = 0o12000;
    pub const PRIO25: i32 = 0o12400;
    pub const PRIO26: i32 = 0o13000;
    pub const PRIO27: i32 = 0o13400;
    pub const PRIO30: i32 = 0o14000;
    pub const PRIO31: i32 = 0o14400;
    pub const PRIO32: i32 = 0o15000;
    pub const PRIO33: i32 = 0o15400;
    pub const PRIO34: i32 = 0o16000;
    pub const PRIO35: i32 = 0o16400;
    pub const PRIO36: i32 = 0o17000;
    pub const PRIO37: i32 = 0o17400;
}

pub mod timers {
    // Timer register numbers
    pub const TIME1: usize = 1;
    pub const TIME2: usize = 2;
    pub const TIME3: usize = 3;
    pub const TIME4: usize = 4;
    pub const TIME5: usize = 5;
    pub const TIME6: usize = 6;

    // Sub-periods in ticks: T3RUPT drives the waitlist, T4RUPT the display
    pub const T3_PERIOD: i32 = 1;
    pub const T4_PERIOD: i32 = 2;

    // Nominal driver cadence
    pub const TICK_MS: u64 = 10;

    // Delays in centiseconds
    pub const HALF_SEC: i32 = 50;
    pub const ONE_SEC: i32 = 100;
    pub const TWO_SECS: i32 = 200;
    pub const THREE_SECS: i32 = 300;
    pub const FOUR_SECS: i32 = 400;
}
