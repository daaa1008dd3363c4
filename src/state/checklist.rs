//! Per-visit inspection checklist state.
//!
//! Four independent flags, reset whenever the checklist's target record
//! changes and discarded when leaving the screen. Nothing here is ever
//! written back to the record.

/// Specifying the inspection items.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChecklistItem {
    Mold,
    Floor,
    WaterPressure,
    HotWater,
}

impl ChecklistItem {
    pub const ALL: [ChecklistItem; 4] = [
        ChecklistItem::Mold,
        ChecklistItem::Floor,
        ChecklistItem::WaterPressure,
        ChecklistItem::HotWater,
    ];

    /// Return the display label for the item.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            ChecklistItem::Mold => "Mold",
            ChecklistItem::Floor => "Floor condition",
            ChecklistItem::WaterPressure => "Water pressure",
            ChecklistItem::HotWater => "Hot water",
        }
    }
}

/// Houses the four inspection flags for one visit.
///
/// `mold` and `floor` start unchecked (problem unconfirmed); water pressure
/// and hot water start checked (assumed fine until the visit says otherwise).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ChecklistState {
    pub mold: bool,
    pub floor: bool,
    pub water_pressure: bool,
    pub hot_water: bool,
}

impl Default for ChecklistState {
    fn default() -> ChecklistState {
        ChecklistState {
            mold: false,
            floor: false,
            water_pressure: true,
            hot_water: true,
        }
    }
}

impl ChecklistState {
    /// Flip exactly one flag, leaving the other three unchanged.
    ///
    pub fn toggle(&mut self, item: ChecklistItem) -> &mut Self {
        match item {
            ChecklistItem::Mold => self.mold = !self.mold,
            ChecklistItem::Floor => self.floor = !self.floor,
            ChecklistItem::WaterPressure => self.water_pressure = !self.water_pressure,
            ChecklistItem::HotWater => self.hot_water = !self.hot_water,
        }
        self
    }

    /// Return whether the given item is currently checked.
    ///
    pub fn is_checked(&self, item: ChecklistItem) -> bool {
        match item {
            ChecklistItem::Mold => self.mold,
            ChecklistItem::Floor => self.floor,
            ChecklistItem::WaterPressure => self.water_pressure,
            ChecklistItem::HotWater => self.hot_water,
        }
    }
}
