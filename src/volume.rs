//! Voxel-grid types for component spatial maps and anatomical masks.
//!
//! The registration collaborator delivers the thresholded per-component
//! Z-maps resampled onto the same reference-template grid as the fixed
//! anatomical masks (2x2x2 mm isotropic in this domain). Here a 4-D map is a
//! sequence of 3-D frames over one grid, one frame per component, and a mask
//! is a binary volume on that grid. Both are read-only inputs to the
//! spatial feature.

use crate::error::{AromaError, Result};

/// Binary 3-D mask on a voxel grid.
#[derive(Debug, Clone)]
pub struct Mask {
    dims: [usize; 3],
    data: Vec<bool>,
}

impl Mask {
    /// Create from flat voxel data (x fastest, z slowest).
    pub fn from_raw(dims: [usize; 3], data: Vec<bool>) -> Result<Self> {
        let nvoxels = dims[0] * dims[1] * dims[2];
        if data.len() != nvoxels {
            return Err(AromaError::DimensionMismatch {
                len: data.len(),
                nrows: nvoxels,
                ncols: 1,
            });
        }
        Ok(Self { dims, data })
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Flat voxel slice.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Number of voxels inside the mask.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }
}

/// One 4-D statistical map: a stack of 3-D component frames on a common grid.
#[derive(Debug, Clone)]
pub struct ComponentMaps {
    dims: [usize; 3],
    nframes: usize,
    data: Vec<f64>,
}

impl ComponentMaps {
    /// Create from flat data: `nframes` frames stored back to back, each
    /// frame `dims[0] * dims[1] * dims[2]` voxels (x fastest, z slowest).
    pub fn from_raw(dims: [usize; 3], nframes: usize, data: Vec<f64>) -> Result<Self> {
        let nvoxels = dims[0] * dims[1] * dims[2];
        if data.len() != nvoxels * nframes {
            return Err(AromaError::DimensionMismatch {
                len: data.len(),
                nrows: nvoxels,
                ncols: nframes,
            });
        }
        Ok(Self {
            dims,
            nframes,
            data,
        })
    }

    /// Grid dimensions of a single frame.
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Number of component frames.
    #[inline]
    pub fn nframes(&self) -> usize {
        self.nframes
    }

    /// Voxels per frame.
    #[inline]
    pub fn nvoxels(&self) -> usize {
        self.dims[0] * self.dims[1] * self.dims[2]
    }

    /// Whether the map holds no voxels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Contiguous voxel slice of one component frame.
    ///
    /// # Panics
    /// Panics if `frame >= nframes`.
    #[inline]
    pub fn frame(&self, frame: usize) -> &[f64] {
        let nvox = self.nvoxels();
        &self.data[frame * nvox..(frame + 1) * nvox]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_from_raw() {
        let mask = Mask::from_raw([2, 2, 1], vec![true, false, true, true]).unwrap();
        assert_eq!(mask.dims(), [2, 2, 1]);
        assert_eq!(mask.count(), 3);
    }

    #[test]
    fn test_mask_length_mismatch() {
        assert!(matches!(
            Mask::from_raw([2, 2, 2], vec![true; 3]),
            Err(AromaError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_maps_frames() {
        let data: Vec<f64> = (0..8).map(|v| v as f64).collect();
        let maps = ComponentMaps::from_raw([2, 2, 1], 2, data).unwrap();
        assert_eq!(maps.nframes(), 2);
        assert_eq!(maps.nvoxels(), 4);
        assert_eq!(maps.frame(0), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(maps.frame(1), &[4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_maps_length_mismatch() {
        assert!(matches!(
            ComponentMaps::from_raw([2, 2, 1], 2, vec![0.0; 7]),
            Err(AromaError::DimensionMismatch { .. })
        ));
    }
}
