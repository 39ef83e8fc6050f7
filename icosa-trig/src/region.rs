pub type RegionIndex = u8;

pub const REGION_COUNT: usize = 6;

/// One of the six symmetric copies of the LCD triangle that make up an
/// icosahedral face. Looking down on the face, centre at the origin:
///
/// ```text
///                 ^ y
///                 |
///                 +
///               . | .
///             .   |   .
///           .  3  |  2  .
///         .       |       .
///       .  4      +     1   .   ---> x
///     .        5  |  0        .
///    + . . . . . . . . . . . . +
/// ```
///
/// Regions 0, 2 and 4 are rotations of each other about the face centre,
/// as are 5, 1 and 3; the two triples are mirror images through the y axis.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Region {
    pub index: RegionIndex,
}

impl Region {
    /// # Panics
    ///
    /// Panics if `index` is not in `0..6`.
    pub fn new(index: RegionIndex) -> Region {
        assert!(
            (index as usize) < REGION_COUNT,
            "Region index {} out of range",
            index
        );
        Region { index }
    }

    pub fn as_usize(self) -> usize {
        self.index as usize
    }

    /// Which 120° step about the face centre this region sits in:
    /// 0 for regions 0 and 5, 1 for 1 and 2, 2 for 3 and 4.
    pub fn rotation_step(self) -> usize {
        ((self.index as usize) + 1) % REGION_COUNT / 2
    }

    /// Whether this region is a mirror image of region 0 rather than a
    /// pure rotation of it.
    pub fn is_mirrored(self) -> bool {
        self.index % 2 == 1
    }

    /// The region on the other side of the y axis.
    pub fn mirror(self) -> Region {
        Region {
            index: (REGION_COUNT as RegionIndex - 1) - self.index,
        }
    }
}

impl From<RegionIndex> for Region {
    fn from(index: RegionIndex) -> Region {
        Region::new(index)
    }
}

// Occasionally useful around the place when we need to iterate over all regions.
pub static REGIONS: [Region; REGION_COUNT] = [
    Region { index: 0 },
    Region { index: 1 },
    Region { index: 2 },
    Region { index: 3 },
    Region { index: 4 },
    Region { index: 5 },
];
