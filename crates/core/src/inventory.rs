//! Equipment slot enumerations of both schemas and the translation
//! between them.
//!
//! The destination has no power source slot, so every slot after it
//! sits one id lower. Slots are translated by name: a source slot lands
//! in the destination slot of the same name, and a source slot with no
//! such counterpart is reported instead of being dropped or shifted.

use crate::error::CoreError;
use crate::types::DbId;

macro_rules! slot_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $id:literal => $label:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// All slots in id order.
            pub const ALL: &'static [$name] = &[$(Self::$variant,)+];

            pub fn id(&self) -> u32 {
                match self {
                    $(Self::$variant => $id,)+
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Returns `None` for ids outside the equipment range.
            pub fn from_id(id: u32) -> Option<Self> {
                match id {
                    $($id => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($label => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

slot_enum! {
    /// Equipment slots of the source schema.
    SourceSlot {
        Charm = 0 => "CHARM",
        LeftEar = 1 => "LEFT_EAR",
        Head = 2 => "HEAD",
        Face = 3 => "FACE",
        RightEar = 4 => "RIGHT_EAR",
        Neck = 5 => "NECK",
        Shoulders = 6 => "SHOULDERS",
        Arms = 7 => "ARMS",
        Back = 8 => "BACK",
        LeftWrist = 9 => "LEFT_WRIST",
        RightWrist = 10 => "RIGHT_WRIST",
        Ranged = 11 => "RANGED",
        Hands = 12 => "HANDS",
        Primary = 13 => "PRIMARY",
        Secondary = 14 => "SECONDARY",
        LeftFinger = 15 => "LEFT_FINGER",
        RightFinger = 16 => "RIGHT_FINGER",
        Chest = 17 => "CHEST",
        Legs = 18 => "LEGS",
        Feet = 19 => "FEET",
        Waist = 20 => "WAIST",
        PowerSource = 21 => "POWER_SOURCE",
        Ammo = 22 => "AMMO",
    }
}

slot_enum! {
    /// Equipment slots of the destination schema.
    DestinationSlot {
        Charm = 0 => "CHARM",
        LeftEar = 1 => "LEFT_EAR",
        Head = 2 => "HEAD",
        Face = 3 => "FACE",
        RightEar = 4 => "RIGHT_EAR",
        Neck = 5 => "NECK",
        Shoulders = 6 => "SHOULDERS",
        Arms = 7 => "ARMS",
        Back = 8 => "BACK",
        LeftWrist = 9 => "LEFT_WRIST",
        RightWrist = 10 => "RIGHT_WRIST",
        Ranged = 11 => "RANGED",
        Hands = 12 => "HANDS",
        Primary = 13 => "PRIMARY",
        Secondary = 14 => "SECONDARY",
        LeftFinger = 15 => "LEFT_FINGER",
        RightFinger = 16 => "RIGHT_FINGER",
        Chest = 17 => "CHEST",
        Legs = 18 => "LEGS",
        Feet = 19 => "FEET",
        Waist = 20 => "WAIST",
        Ammo = 21 => "AMMO",
    }
}

impl SourceSlot {
    /// The destination slot with the same name, if the destination has one.
    pub fn to_destination(self) -> Option<DestinationSlot> {
        DestinationSlot::from_name(self.name())
    }
}

/// Translate a source inventory slot id into the destination's id.
///
/// Fails for the power source slot and for any id outside the equipment
/// enumeration (bags, bank, cursor), whose layouts are not mapped.
pub fn translate_slot_id(character_id: DbId, slot_id: u32) -> Result<u32, CoreError> {
    SourceSlot::from_id(slot_id)
        .and_then(SourceSlot::to_destination)
        .map(|slot| slot.id())
        .ok_or(CoreError::UnmappedInventorySlot {
            character_id,
            slot_id,
        })
}
