use esp_idf_svc::hal::adc::attenuation;
use esp_idf_svc::sys::adc_atten_t;

use thermistor::{Attenuation, Bitwidth};

// GPIO34 is ADC1 channel 6 on the ESP32
pub const THERMISTOR_CHANNEL: u8 = 6;

// Oneshot driver default, and the only width line fitting is characterised for
pub const NATIVE_BITWIDTH: Bitwidth = Bitwidth::Bits12;

pub fn attenuation(input: Attenuation) -> adc_atten_t {
    match input {
        Attenuation::Db0 => attenuation::NONE,
        Attenuation::Db2_5 => attenuation::DB_2_5,
        Attenuation::Db6 => attenuation::DB_6,
        Attenuation::Db12 => attenuation::DB_12,
    }
}
