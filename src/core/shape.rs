use crate::core::errors::*;

// Grids own freshly allocated storage, so shapes are always contiguous
// row-major and strides are derived on the fly in `idx`.
#[derive(Clone, PartialEq)]
pub(crate) struct Shape {
    pub sizes: Vec<usize>,
}

impl Shape {
    pub(crate) fn new(sizes: &[usize]) -> Shape {
        Shape {
            sizes: sizes.to_vec(),
        }
    }

    pub(crate) fn rank(&self) -> usize {
        self.sizes.len()
    }

    pub(crate) fn numel(&self) -> usize {
        self.sizes.iter().product()
    }

    // --- Index ---

    pub(crate) fn idx(&self, indices: &[usize]) -> usize {
        self.sizes
            .iter()
            .zip(indices)
            .fold(0, |offset, (&size, &index)| offset * size + index)
    }

    pub(crate) fn index(&self, indices: &[usize]) -> Result<usize, IndexError> {
        self.valid_indices(indices)?;

        Ok(self.idx(indices))
    }

    // --- Validation ---

    fn valid_indices(&self, indices: &[usize]) -> Result<(), IndexError> {
        if indices.len() != self.rank() {
            return Err(IndexError::IndicesLength {
                num_indices: indices.len(),
                num_dimensions: self.rank(),
            });
        }

        for (dimension, (&index, &size)) in indices.iter().zip(&self.sizes).enumerate() {
            if index >= size {
                return Err(IndexError::OutOfRange {
                    index,
                    dimension,
                    size,
                });
            }
        }

        Ok(())
    }

    pub(crate) fn valid_data_length(
        &self,
        data_length: usize,
    ) -> Result<(), InvalidDataLengthError> {
        let numel = self.numel();

        if data_length != numel {
            Err(InvalidDataLengthError {
                data_length,
                grid_size: numel,
            })
        } else {
            Ok(())
        }
    }

    pub(crate) fn valid_extents(&self) -> Result<(), EmptyGridError> {
        if self.sizes.is_empty() || self.sizes.contains(&0) {
            Err(EmptyGridError(self.sizes.clone()))
        } else {
            Ok(())
        }
    }
}
