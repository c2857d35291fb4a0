use anyhow::{bail, Result};
use num_traits::{One, Zero};
use std::sync::Arc;

use crate::core::{errors::*, shape::Shape};

pub struct Grid<T> {
    pub(crate) data: Arc<Vec<T>>,
    pub(crate) shape: Shape,
}

impl<T: Copy> Grid<T> {
    pub(crate) fn init(data: Vec<T>, sizes: &[usize]) -> Grid<T> {
        Grid {
            data: Arc::new(data),
            shape: Shape::new(sizes),
        }
    }

    pub fn new(data: &[T], sizes: &[usize]) -> Result<Grid<T>> {
        let shape = Shape::new(sizes);
        shape.valid_extents()?;
        shape.valid_data_length(data.len())?;

        Ok(Grid {
            data: Arc::new(data.to_vec()),
            shape,
        })
    }

    /// Rank-2 grid from nested rows. Ragged rows are rejected.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Grid<T>> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());

        let mut data = Vec::with_capacity(height * width);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                bail!(RaggedGridError::Rows {
                    row: i,
                    length: row.len(),
                    expected: width,
                });
            }

            data.extend_from_slice(row);
        }

        Grid::new(&data, &[height, width])
    }

    /// Rank-3 grid from nested rows of channel vectors. Ragged rows and
    /// uneven channel counts are rejected.
    pub fn from_channels(rows: &[Vec<Vec<T>>]) -> Result<Grid<T>> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let channels = rows
            .first()
            .and_then(|row| row.first())
            .map_or(0, |cell| cell.len());

        let mut data = Vec::with_capacity(height * width * channels);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                bail!(RaggedGridError::Rows {
                    row: i,
                    length: row.len(),
                    expected: width,
                });
            }

            for (j, cell) in row.iter().enumerate() {
                if cell.len() != channels {
                    bail!(RaggedGridError::Channels {
                        row: i,
                        column: j,
                        channels: cell.len(),
                        expected: channels,
                    });
                }

                data.extend_from_slice(cell);
            }
        }

        Grid::new(&data, &[height, width, channels])
    }

    pub fn same(element: T, sizes: &[usize]) -> Result<Grid<T>> {
        let shape = Shape::new(sizes);
        shape.valid_extents()?;

        Ok(Grid {
            data: Arc::new(vec![element; shape.numel()]),
            shape,
        })
    }

    pub fn zeroes(sizes: &[usize]) -> Result<Grid<T>>
    where
        T: Zero,
    {
        Grid::same(T::zero(), sizes)
    }

    pub fn ones(sizes: &[usize]) -> Result<Grid<T>>
    where
        T: One,
    {
        Grid::same(T::one(), sizes)
    }

    // --- Data ---

    pub(crate) fn idx(&self, indices: &[usize]) -> T {
        self.data[self.shape.idx(indices)]
    }

    pub fn index(&self, indices: &[usize]) -> Result<T> {
        Ok(self.data[self.shape.index(indices)?])
    }

    // --- Padding ---

    /// Wraps the spatial axes in a symmetric border of `width` cells of
    /// `fill`. The channel axis of a rank-3 grid is untouched. `width == 0`
    /// shares storage with `self` instead of copying.
    pub fn pad(&self, width: isize, fill: T) -> Result<Grid<T>> {
        if width < 0 {
            bail!(ArgumentError::NegativePadding(width));
        }
        if width == 0 {
            return Ok(self.clone());
        }

        let width = width as usize;
        let (height, spatial_width, channels) = match *self.sizes() {
            [height, spatial_width] => (height, spatial_width, 1),
            [height, spatial_width, channels] => (height, spatial_width, channels),
            _ => bail!(RankError::Grid(self.rank())),
        };

        let mut sizes = self.sizes().to_vec();
        sizes[0] = height + 2 * width;
        sizes[1] = spatial_width + 2 * width;

        // One fill-valued buffer sized for the padded shape, interior rows
        // copied in as contiguous lanes of `spatial_width * channels` cells.
        let src_row = spatial_width * channels;
        let dst_row = sizes[1] * channels;
        let mut data = vec![fill; sizes[0] * dst_row];

        for i in 0..height {
            let src = i * src_row;
            let dst = (i + width) * dst_row + width * channels;
            data[dst..dst + src_row].copy_from_slice(&self.data[src..src + src_row]);
        }

        Ok(Grid::init(data, &sizes))
    }
}

impl<T> Grid<T> {
    // --- Shape Attributes ---

    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    pub fn sizes(&self) -> &[usize] {
        &self.shape.sizes
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T> Clone for Grid<T> {
    fn clone(&self) -> Grid<T> {
        Grid {
            data: Arc::clone(&self.data),
            shape: self.shape.clone(),
        }
    }
}

impl<T: Copy + PartialEq> PartialEq for Grid<T> {
    fn eq(&self, rhs: &Grid<T>) -> bool {
        self.data == rhs.data && self.shape == rhs.shape
    }
}
