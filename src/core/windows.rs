// Top-left window corners over a padded grid, advancing by `stride` on both
// spatial axes, row-major order.
pub(crate) struct Windows {
    limits: [usize; 2],
    stride: usize,
    indices: [usize; 2],
    current: usize,
    maximum: usize,
}

impl Windows {
    pub(crate) fn new(
        padded_sizes: [usize; 2],
        kernel_sizes: [usize; 2],
        output_sizes: [usize; 2],
        stride: usize,
    ) -> Self {
        Windows {
            limits: [
                padded_sizes[0] - kernel_sizes[0],
                padded_sizes[1] - kernel_sizes[1],
            ],
            stride,
            indices: [0, 0],
            current: 0,
            maximum: output_sizes.iter().product(),
        }
    }
}

impl Iterator for Windows {
    type Item = [usize; 2];

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.maximum {
            return None;
        };

        let next = self.indices;

        for i in (0..2).rev() {
            self.indices[i] += self.stride;

            if self.indices[i] > self.limits[i] {
                self.indices[i] = 0;
            } else {
                break;
            }
        }

        self.current += 1;
        Some(next)
    }
}
