use crate::units::RawCode;

// Input range of the analog front end
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Attenuation {
    Db0,
    Db2_5,
    Db6,
    Db12,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Bitwidth {
    Bits9,
    Bits10,
    Bits11,
    Bits12,
    Bits13,
}

impl Bitwidth {
    pub fn bits(&self) -> u8 {
        match self {
            Bitwidth::Bits9 => 9,
            Bitwidth::Bits10 => 10,
            Bitwidth::Bits11 => 11,
            Bitwidth::Bits12 => 12,
            Bitwidth::Bits13 => 13,
        }
    }

    pub fn max_code(&self) -> RawCode {
        RawCode((1u16 << self.bits()) - 1)
    }
}

/// Which channel is sampled and how its codes map to a voltage.
///
/// Built once at startup and handed to the `VoltageSampler`, which keeps it for
/// the rest of the process.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CalibrationContext {
    pub channel: u8,
    pub attenuation: Attenuation,
    pub bitwidth: Bitwidth,
}

impl CalibrationContext {
    pub fn new(channel: u8, attenuation: Attenuation, bitwidth: Bitwidth) -> Self {
        Self {
            channel,
            attenuation,
            bitwidth,
        }
    }

    pub fn accepts(&self, raw: RawCode) -> bool {
        raw <= self.bitwidth.max_code()
    }
}

impl Default for CalibrationContext {
    fn default() -> Self {
        // ADC1 channel 6, full 0-3.1V range
        CalibrationContext::new(6, Attenuation::Db12, Bitwidth::Bits12)
    }
}
