//! Built-in activity sections registered before user configuration is read.

use super::Section;

/// Fallback tool picked when nothing in the priority list is carried.
pub const DEFAULT_TOOL: &str = "Torch";

/// A built-in section in its configuration-file spelling.
#[derive(Debug, Clone, Copy)]
pub struct DefaultSection {
    pub name: &'static str,
    pub active_on: &'static [&'static str],
    pub priority_list: &'static [&'static str],
}

impl DefaultSection {
    pub fn to_section(&self) -> Section {
        Section::new(
            self.name,
            self.active_on.iter().copied(),
            self.priority_list.iter().copied(),
        )
    }
}

const MINING: DefaultSection = DefaultSection {
    name: "Mining",
    active_on: &["ore", "wall"],
    priority_list: &[
        "LightningGun",
        "LaserDrillTool",
        "LegendaryMiningPick",
        "SolariteMiningPick",
        "GalaxiteMiningPick",
        "OctarineMiningPick",
        "AncientMiningPick",
        "DrillToolScarlet",
        "ScarletMiningPick",
        "IronMiningPick",
        "DrillTool",
        "TinMiningPick",
        "CopperMiningPick",
        "WoodMiningPick",
    ],
};

const FARMING: DefaultSection = DefaultSection {
    name: "Farming",
    active_on: &[
        "HeartBerryPlant",
        "GlowingTulipPlant",
        "BombPepperPlant",
        "CarrockPlant",
        "PuffungiPlant",
        "RootPlant",
        "GrubKapokPlant",
        "CoralRootPlant",
        "BloatOatPlant",
        "PewpayaPlant",
        "PinegrapplePlant",
        "GrumpkinPlant",
        "SunricePlant",
        "LunacornPlant",
        "GleamRootPlant",
        "wateredGround",
        "groundSlime",
    ],
    priority_list: &["ScarletHoe", "IronHoe", "TinHoe", "CopperHoe", "WoodHoe"],
};

const CATCHING: DefaultSection = DefaultSection {
    name: "Catching",
    active_on: &[
        "CritterBeetle",
        "CritterLarva",
        "CritterCrab",
        "ButterflySunset",
        "ButterflyDreamy",
        "ButterflyCitrus",
        "ButterflyIcy",
        "ButterflyBase",
        "CritterScorpion",
        "CritterGrasshopper",
        "CritterWorm",
        "CritterCentipede",
        "CritterCockroach",
        "CritterCrab2",
        "CritterTinySnail",
        "CritterSnootFly",
        "CritterNewt",
        "CritterPassageFly",
    ],
    priority_list: &["BugNet"],
};

const FISHING: DefaultSection = DefaultSection {
    name: "Fishing",
    active_on: &["water"],
    priority_list: &[
        "SolariteFishingRod",
        "GalaxiteFishingRod",
        "OctarineFishingRod",
        "ScarletFishingRod",
        "IronFishingRod",
        "TinFishingRod",
        "WoodFishingRod",
    ],
};

const DIGGING: DefaultSection = DefaultSection {
    name: "Digging",
    active_on: &[
        "DiggingSpot",
        "DiggingSpotNature",
        "DiggingSpotSea",
        "DiggingSpotDesert",
        "DiggingSpotLava",
    ],
    priority_list: &[
        "GalaxiteShovel",
        "OctarineShovel",
        "ScarletShovel",
        "IronShovel",
        "TinShovel",
        "CopperShovel",
        "WoodShovel",
    ],
};

/// Built-in sections in registration order.
pub const DEFAULT_SECTIONS: [DefaultSection; 5] = [MINING, FARMING, CATCHING, FISHING, DIGGING];

/// Built-in sections as rules.
pub fn default_sections() -> Vec<Section> {
    DEFAULT_SECTIONS.iter().map(DefaultSection::to_section).collect()
}
