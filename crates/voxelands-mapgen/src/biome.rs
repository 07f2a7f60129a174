//! Biome classification of map blocks.
//!
//! The decision is an ordered list of threshold rules and the first match
//! wins. The order and the direction of every comparison are part of the
//! world format: changing either reassigns biomes in existing worlds.

use std::fmt;
use std::str::FromStr;

use glam::{I16Vec2, I16Vec3};

use crate::block::BlockMakeData;
use crate::coords::{block_node_max, block_node_min};
use crate::fields::humidity;
use crate::sector::sector_average_ground_level;
use crate::{MAP_BLOCKSIZE, SKY_MIN_Y, SPACE_MIN_Y, THE_DEEP_MAX_Y, WorldSeed};

/// The biome of a block column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    Space,
    Sky,
    TheDeep,
    Ocean,
    SnowCap,
    Beach,
    Lake,
    WoodLands,
    Forest,
    Jungle,
    Desert,
    Plains,
}

impl Biome {
    pub const ALL: [Biome; 12] = [
        Biome::Space,
        Biome::Sky,
        Biome::TheDeep,
        Biome::Ocean,
        Biome::SnowCap,
        Biome::Beach,
        Biome::Lake,
        Biome::WoodLands,
        Biome::Forest,
        Biome::Jungle,
        Biome::Desert,
        Biome::Plains,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Biome::Space => "space",
            Biome::Sky => "sky",
            Biome::TheDeep => "thedeep",
            Biome::Ocean => "ocean",
            Biome::SnowCap => "snowcap",
            Biome::Beach => "beach",
            Biome::Lake => "lake",
            Biome::WoodLands => "woodlands",
            Biome::Forest => "forest",
            Biome::Jungle => "jungle",
            Biome::Desert => "desert",
            Biome::Plains => "plains",
        }
    }

    /// Biomes decided by altitude alone, before any terrain is looked at.
    pub fn from_altitude(node_min_y: i16, node_max_y: i16) -> Option<Biome> {
        if node_min_y >= SPACE_MIN_Y {
            Some(Biome::Space)
        } else if node_min_y >= SKY_MIN_Y {
            Some(Biome::Sky)
        } else if node_max_y <= THE_DEEP_MAX_Y {
            Some(Biome::TheDeep)
        } else {
            None
        }
    }

    /// Surface biome from the sector's average ground height and its
    /// humidity. `humidity` is only called when the height alone does not
    /// decide the biome.
    pub fn from_surface(average_ground_height: i16, humidity: impl FnOnce() -> f32) -> Biome {
        let h = average_ground_height;
        if h <= -10 {
            return Biome::Ocean;
        }
        if h >= 40 {
            return Biome::SnowCap;
        }

        let wet = humidity();

        if h <= 2 {
            return if wet < 0.5 { Biome::Beach } else { Biome::Lake };
        }

        if h > 30 {
            return if wet < 0.25 {
                Biome::WoodLands
            } else if wet < 0.5 {
                Biome::Forest
            } else {
                Biome::Jungle
            };
        }

        if h > 10 {
            return if wet < 0.25 {
                Biome::Desert
            } else if wet < 0.5 {
                Biome::WoodLands
            } else if wet < 0.75 {
                Biome::Forest
            } else {
                Biome::Jungle
            };
        }

        if wet < 0.25 {
            Biome::Plains
        } else if wet < 0.75 {
            Biome::WoodLands
        } else {
            Biome::Forest
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no biome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown biome: {0}")]
pub struct ParseBiomeError(pub String);

impl FromStr for Biome {
    type Err = ParseBiomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Biome::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseBiomeError(s.to_string()))
    }
}

/// Classifies the block described by `data`, stores the result in
/// `data.biome` and returns it.
pub fn calc_biome(data: &mut BlockMakeData) -> Biome {
    let biome = classify_block(data.seed, data.blockpos);
    tracing::trace!(blockpos = %data.blockpos, %biome, "classified block");
    data.biome = Some(biome);
    biome
}

fn classify_block(seed: WorldSeed, blockpos: I16Vec3) -> Biome {
    let node_min = block_node_min(blockpos);
    let node_max = block_node_max(blockpos);

    if let Some(biome) = Biome::from_altitude(node_min.y, node_max.y) {
        return biome;
    }

    let sector = I16Vec2::new(blockpos.x, blockpos.z);
    let average = sector_average_ground_level(seed, sector) as i16;
    let half = MAP_BLOCKSIZE / 2;
    let center = I16Vec2::new(node_min.x.wrapping_add(half), node_min.z.wrapping_add(half));

    Biome::from_surface(average, || humidity(seed, center))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_altitude_gates() {
        assert_eq!(Biome::from_altitude(1024, 1039), Some(Biome::Space));
        assert_eq!(Biome::from_altitude(1008, 1023), Some(Biome::Sky));
        assert_eq!(Biome::from_altitude(256, 271), Some(Biome::Sky));
        assert_eq!(Biome::from_altitude(240, 255), None);
        assert_eq!(Biome::from_altitude(-144, -129), Some(Biome::TheDeep));
        assert_eq!(Biome::from_altitude(-143, -128), Some(Biome::TheDeep));
        assert_eq!(Biome::from_altitude(-142, -127), None);
    }

    #[test]
    fn test_altitude_dominates_terrain() {
        for seed in [0, 1, 42, 9_999_999, u64::MAX] {
            for x in -5..5 {
                for z in -5..5 {
                    let mut space = BlockMakeData::new(seed, I16Vec3::new(x, 64, z));
                    assert_eq!(calc_biome(&mut space), Biome::Space);
                    let mut sky = BlockMakeData::new(seed, I16Vec3::new(x, 16, z));
                    assert_eq!(calc_biome(&mut sky), Biome::Sky);
                    let mut deep = BlockMakeData::new(seed, I16Vec3::new(x, -9, z));
                    assert_eq!(calc_biome(&mut deep), Biome::TheDeep);
                }
            }
        }
    }

    #[test]
    fn test_height_thresholds() {
        let any = || 0.1;
        assert_eq!(Biome::from_surface(-11, any), Biome::Ocean);
        assert_eq!(Biome::from_surface(-10, any), Biome::Ocean);
        assert_ne!(Biome::from_surface(-9, any), Biome::Ocean);
        assert_eq!(Biome::from_surface(40, any), Biome::SnowCap);
        assert_ne!(Biome::from_surface(39, any), Biome::SnowCap);
    }

    #[test]
    fn test_height_alone_skips_humidity() {
        let never = || -> f32 { panic!("humidity must not be sampled") };
        assert_eq!(Biome::from_surface(-10, never), Biome::Ocean);
        assert_eq!(Biome::from_surface(45, never), Biome::SnowCap);
    }

    #[test]
    fn test_lowland_band() {
        assert_eq!(Biome::from_surface(2, || 0.49), Biome::Beach);
        assert_eq!(Biome::from_surface(2, || 0.5), Biome::Lake);
        assert_eq!(Biome::from_surface(-9, || 0.0), Biome::Beach);
        assert_eq!(Biome::from_surface(3, || 0.49), Biome::WoodLands);
    }

    #[test]
    fn test_highland_band() {
        assert_eq!(Biome::from_surface(31, || 0.24), Biome::WoodLands);
        assert_eq!(Biome::from_surface(31, || 0.25), Biome::Forest);
        assert_eq!(Biome::from_surface(31, || 0.49), Biome::Forest);
        assert_eq!(Biome::from_surface(31, || 0.5), Biome::Jungle);
        assert_eq!(Biome::from_surface(39, || 1.0), Biome::Jungle);
        // 30 is not above 30: falls through to the mid band.
        assert_eq!(Biome::from_surface(30, || 0.1), Biome::Desert);
    }

    #[test]
    fn test_midland_band() {
        assert_eq!(Biome::from_surface(11, || 0.24), Biome::Desert);
        assert_eq!(Biome::from_surface(11, || 0.25), Biome::WoodLands);
        assert_eq!(Biome::from_surface(11, || 0.5), Biome::Forest);
        assert_eq!(Biome::from_surface(11, || 0.74), Biome::Forest);
        assert_eq!(Biome::from_surface(11, || 0.75), Biome::Jungle);
        // 10 is not above 10: falls through to the plains band.
        assert_eq!(Biome::from_surface(10, || 0.1), Biome::Plains);
    }

    #[test]
    fn test_plains_band() {
        assert_eq!(Biome::from_surface(5, || 0.0), Biome::Plains);
        assert_eq!(Biome::from_surface(5, || 0.25), Biome::WoodLands);
        assert_eq!(Biome::from_surface(5, || 0.74), Biome::WoodLands);
        assert_eq!(Biome::from_surface(5, || 0.75), Biome::Forest);
    }

    #[test]
    fn test_highland_humid_is_jungle() {
        // A sector averaging 35 nodes with humidity 0.6.
        assert_eq!(Biome::from_surface(35, || 0.6), Biome::Jungle);
    }

    #[test]
    fn test_calc_biome_always_assigns() {
        for seed in [0, 42, 1337] {
            for x in -20..20 {
                for y in -10..70 {
                    let mut data = BlockMakeData::new(seed, I16Vec3::new(x * 13, y, -x * 7));
                    let biome = calc_biome(&mut data);
                    assert_eq!(data.biome, Some(biome));
                    assert!(Biome::ALL.contains(&biome));
                }
            }
        }
    }

    #[test]
    fn test_calc_biome_deterministic() {
        for x in -30..30 {
            let pos = I16Vec3::new(x, 0, x / 2);
            let mut a = BlockMakeData::new(42, pos);
            let mut b = BlockMakeData::new(42, pos);
            assert_eq!(calc_biome(&mut a), calc_biome(&mut b));
        }
    }

    #[test]
    fn test_surface_blocks_agree_with_sector_statistics() {
        let seed = 42;
        for x in -20..20 {
            for z in -20..20 {
                let pos = I16Vec3::new(x, 0, z);
                let mut data = BlockMakeData::new(seed, pos);
                let biome = calc_biome(&mut data);
                let average = sector_average_ground_level(seed, I16Vec2::new(x, z)) as i16;
                let center = I16Vec2::new(x * 16 + 8, z * 16 + 8);
                assert_eq!(biome, Biome::from_surface(average, || humidity(seed, center)));
            }
        }
    }

    #[test]
    fn test_names_round_trip() {
        for biome in Biome::ALL {
            assert_eq!(biome.to_string().parse::<Biome>(), Ok(biome));
        }
        assert_eq!("WoodLands".parse::<Biome>(), Ok(Biome::WoodLands));
        assert!("tundra".parse::<Biome>().is_err());
    }
}
