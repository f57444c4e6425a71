//! Controller settings edited through the menu.
//!
//! Temperatures are whole °C, servo positions whole degrees (0..=180).

/// Number of switched relay outputs (D4..D7).
pub const RELAY_COUNT: usize = 4;

/// Pick list shown for a relay's type, in [`RelayType`] order.
pub const RELAY_TYPES: &str = "Unused|Conv Fan|Cool Fan|Bottom|Boost|Top";

/// Pick list of reflow profiles, in [`ReflowProfile`] order.
pub const REFLOW_PROFILES: &str = "Lead free|Leaded";

pub const BAKE_MIN_TEMPERATURE: i16 = 40;
pub const BAKE_MAX_TEMPERATURE: i16 = 200;
/// 18 hours.
pub const BAKE_MAX_MINUTES: i16 = 1080;

/// What a relay output drives. Fans come first, heating elements last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RelayType {
    Unused,
    ConvectionFan,
    CoolingFan,
    Bottom,
    Boost,
    Top,
}

impl RelayType {
    const ALL: [RelayType; 6] = [
        RelayType::Unused,
        RelayType::ConvectionFan,
        RelayType::CoolingFan,
        RelayType::Bottom,
        RelayType::Boost,
        RelayType::Top,
    ];

    /// Position in [`RELAY_TYPES`].
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub fn is_heating(self) -> bool {
        matches!(self, RelayType::Bottom | RelayType::Boost | RelayType::Top)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Relay {
    pub kind: RelayType,
    /// Target power is scaled to this percentage (0..=100).
    pub max_power: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReflowProfile {
    LeadFree,
    Leaded,
}

impl ReflowProfile {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(ReflowProfile::LeadFree),
            1 => Some(ReflowProfile::Leaded),
            _ => None,
        }
    }
}

/// Persistent controller settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OvenSettings {
    pub relays: [Relay; RELAY_COUNT],

    /// Below this the oven counts as cool.
    pub cool_temp: i16,
    /// No operating temperature may be set above this.
    pub max_temp: i16,
    /// Above this every relay is switched off and the running job aborts.
    pub over_temp: i16,

    /// Door fully closed.
    pub servo_retract_deg: u8,
    /// Just before the door starts to open.
    pub servo_armed_deg: u8,
    /// Door fully open.
    pub servo_open_deg: u8,
    /// Time to open the door, in tenths of a second.
    pub servo_open_time: u8,

    pub reflow_profile: ReflowProfile,
    pub bake_temp: i16,
    pub bake_minutes: i16,

    pub buzzer: bool,
    /// Thermocouple correction in hundredths of a degree.
    pub tc_offset: i32,
}

impl Default for OvenSettings {
    fn default() -> Self {
        Self {
            relays: [
                Relay { kind: RelayType::Top, max_power: 100 },
                Relay { kind: RelayType::Bottom, max_power: 100 },
                Relay { kind: RelayType::Boost, max_power: 60 },
                Relay { kind: RelayType::ConvectionFan, max_power: 100 },
            ],
            cool_temp: 50,
            max_temp: 260,
            over_temp: 280,
            servo_retract_deg: 90,
            servo_armed_deg: 100,
            servo_open_deg: 180,
            servo_open_time: 30,
            reflow_profile: ReflowProfile::LeadFree,
            bake_temp: 120,
            bake_minutes: 60,
            buzzer: true,
            tc_offset: 0,
        }
    }
}

/// A job requested from the menu, picked up by the control loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Job {
    Reflow(ReflowProfile),
    Bake { temp: i16, minutes: i16 },
}

/// Menu context: the settings plus the runtime state menu actions touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Oven {
    pub settings: OvenSettings,
    /// Relay settings as last saved when leaving the Outputs menu.
    pub saved_relays: [Relay; RELAY_COUNT],
    /// Times the Outputs menu loaded and saved the relay block.
    pub output_loads: u32,
    pub output_saves: u32,
    /// Commanded servo angle. Follows previews while a servo field is edited.
    pub servo_position: u8,
    pub job: Option<Job>,
    pub factory_resets: u32,
}

impl Oven {
    pub fn new(settings: OvenSettings) -> Self {
        Self {
            settings,
            saved_relays: settings.relays,
            output_loads: 0,
            output_saves: 0,
            servo_position: settings.servo_retract_deg,
            job: None,
            factory_resets: 0,
        }
    }

    /// Take the pending job, if any.
    pub fn take_job(&mut self) -> Option<Job> {
        self.job.take()
    }
}

impl Default for Oven {
    fn default() -> Self {
        Self::new(OvenSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::format::list_count;

    #[test]
    fn relay_types_match_pick_list() {
        assert_eq!(list_count(RELAY_TYPES), RelayType::ALL.len());
        for kind in RelayType::ALL {
            assert_eq!(RelayType::from_index(kind.index()), Some(kind));
        }
        assert_eq!(RelayType::from_index(6), None);
    }

    #[test]
    fn heating_elements_are_last() {
        assert!(!RelayType::CoolingFan.is_heating());
        assert!(RelayType::Bottom.is_heating());
        assert!(RelayType::Top.is_heating());
    }

    #[test]
    fn profiles_match_pick_list() {
        assert_eq!(list_count(REFLOW_PROFILES), 2);
        assert_eq!(ReflowProfile::from_index(1), Some(ReflowProfile::Leaded));
        assert_eq!(ReflowProfile::from_index(2), None);
    }

    #[test]
    fn new_oven_starts_saved_and_retracted() {
        let oven = Oven::default();
        assert_eq!(oven.saved_relays, oven.settings.relays);
        assert_eq!(oven.servo_position, 90);
        assert!(oven.job.is_none());
    }
}
