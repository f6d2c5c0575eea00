// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Finding the region that contains a point.
//!
//! The lookup is a linear scan in the order the host enumerated the regions,
//! stopping at the first hit. When regions overlap, whichever comes first in
//! that enumeration wins; callers depend on this being deterministic, so the
//! scan must not be replaced by an order-agnostic spatial index.

use nalgebra::Point3;

use crate::error::{Error, Result};
use crate::region::Region;

/// Returns the first region (in enumeration order) whose bounding volume
/// contains `p`.
///
/// Fails with [`Error::RegionNotFound`] when no region contains the point,
/// including when `regions` is empty.
pub fn find_containing<'a, I>(regions: I, p: &Point3<f64>) -> Result<&'a Region>
where
    I: IntoIterator<Item = &'a Region>,
{
    for region in regions {
        if region.contains(p) {
            return Ok(region);
        }
    }
    Err(Error::RegionNotFound {
        x: p.x,
        y: p.y,
        z: p.z,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionId;
    use roomdup_geometry::BoundingVolume;

    fn region(id: u64, min: [f64; 3], max: [f64; 3]) -> Region {
        Region::new(
            RegionId(id),
            BoundingVolume::new(min.into(), max.into()),
            min[2],
        )
    }

    #[test]
    fn finds_the_containing_region() {
        let regions = vec![
            region(1, [0.0, 0.0, 0.0], [5.0, 5.0, 3.0]),
            region(2, [10.0, 0.0, 0.0], [15.0, 5.0, 3.0]),
        ];
        let found = find_containing(&regions, &Point3::new(12.0, 2.0, 1.0)).unwrap();
        assert_eq!(found.id, RegionId(2));
    }

    #[test]
    fn first_match_wins_for_overlapping_regions() {
        let regions = vec![
            region(1, [0.0, 0.0, 0.0], [10.0, 10.0, 3.0]),
            region(2, [5.0, 5.0, 0.0], [15.0, 15.0, 3.0]),
        ];
        // inside both; enumeration order decides
        let p = Point3::new(7.0, 7.0, 1.0);
        assert_eq!(find_containing(&regions, &p).unwrap().id, RegionId(1));

        let reversed: Vec<_> = regions.iter().rev().cloned().collect();
        assert_eq!(find_containing(&reversed, &p).unwrap().id, RegionId(2));
    }

    #[test]
    fn point_outside_all_regions_is_not_found() {
        let regions = vec![region(1, [0.0, 0.0, 0.0], [5.0, 5.0, 3.0])];
        let err = find_containing(&regions, &Point3::new(100.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, Error::RegionNotFound { x, .. } if x == 100.0));
    }

    #[test]
    fn empty_region_collection_is_not_found() {
        let err = find_containing(&[], &Point3::new(0.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, Error::RegionNotFound { .. }));
    }
}
