use anyhow::{bail, Result};
use num_traits::{FromPrimitive, ToPrimitive, Zero};

use crate::core::{
    errors::*,
    grid::Grid,
    utils::{cast_f64, cast_rounded, round_half_away},
    windows::Windows,
};

impl<T> Grid<T>
where
    T: Copy + Zero + ToPrimitive + FromPrimitive,
{
    /// Rank dispatch: rank-2 grids go through [`Grid::convolve_2d`], rank-3
    /// grids through [`Grid::convolve_3d`].
    pub fn convolve(&self, kernel: &Grid<T>, padding: isize, stride: usize) -> Result<Grid<T>> {
        match self.rank() {
            2 => self.convolve_2d(kernel, padding, stride),
            3 => self.convolve_3d(kernel, padding, stride),
            rank => bail!(RankError::Grid(rank)),
        }
    }

    /// Convolves a rank-2 grid with a rank-2 kernel. Each output cell is the
    /// elementwise product sum of one kernel-sized window, divided by the
    /// kernel cell count and rounded half away from zero. An averaged,
    /// rounded correlation rather than literal convolution math.
    pub fn convolve_2d(&self, kernel: &Grid<T>, padding: isize, stride: usize) -> Result<Grid<T>> {
        valid_arguments(padding, stride)?;
        let kernel_sizes = valid_kernel(kernel)?;

        let input_sizes = match *self.sizes() {
            [height, width] => [height, width],
            [_, _, _] => bail!(RankError::SpatialOnly(3)),
            _ => bail!(RankError::Grid(self.rank())),
        };

        let output = output_sizes(&input_sizes, &kernel_sizes, padding as usize, stride)?;
        let padded = self.pad(padding, T::zero())?;
        let padded_sizes = [padded.sizes()[0], padded.sizes()[1]];

        let [kernel_height, kernel_width] = kernel_sizes;
        let cells = (kernel_height * kernel_width) as f64;

        let mut values = Vec::with_capacity(output[0] * output[1]);

        for [pi, pj] in Windows::new(padded_sizes, kernel_sizes, output, stride) {
            let mut sum = 0.0;

            for fi in 0..kernel_height {
                for fj in 0..kernel_width {
                    let cell = cast_f64(padded.idx(&[pi + fi, pj + fj]))?;
                    let weight = cast_f64(kernel.idx(&[fi, fj]))?;

                    sum += cell * weight;
                }
            }

            values.push(cast_rounded::<T>(round_half_away(sum / cells))?);
        }

        assemble(values, output)
    }

    /// Convolves a rank-3 grid with a rank-2 kernel, collapsing the channel
    /// axis: per window, each channel's product sum is divided by the kernel
    /// cell count and rounded, then the rounded per-channel values are
    /// averaged across channels and rounded again. Rank-2 grids delegate to
    /// [`Grid::convolve_2d`].
    pub fn convolve_3d(&self, kernel: &Grid<T>, padding: isize, stride: usize) -> Result<Grid<T>> {
        valid_arguments(padding, stride)?;
        let kernel_sizes = valid_kernel(kernel)?;

        let (input_sizes, channels) = match *self.sizes() {
            [_, _] => return self.convolve_2d(kernel, padding, stride),
            [height, width, channels] => ([height, width], channels),
            _ => bail!(RankError::Grid(self.rank())),
        };

        let output = output_sizes(&input_sizes, &kernel_sizes, padding as usize, stride)?;
        let padded = self.pad(padding, T::zero())?;
        let padded_sizes = [padded.sizes()[0], padded.sizes()[1]];

        let [kernel_height, kernel_width] = kernel_sizes;
        let cells = (kernel_height * kernel_width) as f64;

        let mut values = Vec::with_capacity(output[0] * output[1]);
        let mut sums = vec![0.0; channels];

        for [pi, pj] in Windows::new(padded_sizes, kernel_sizes, output, stride) {
            sums.fill(0.0);

            for fi in 0..kernel_height {
                for fj in 0..kernel_width {
                    let weight = cast_f64(kernel.idx(&[fi, fj]))?;

                    for (k, sum) in sums.iter_mut().enumerate() {
                        *sum += cast_f64(padded.idx(&[pi + fi, pj + fj, k]))? * weight;
                    }
                }
            }

            // Double rounding: once per channel, once across channels.
            let collapsed = sums
                .iter()
                .map(|&sum| round_half_away(sum / cells))
                .sum::<f64>()
                / channels as f64;

            values.push(cast_rounded::<T>(round_half_away(collapsed))?);
        }

        assemble(values, output)
    }
}

// --- Validation ---

fn valid_arguments(padding: isize, stride: usize) -> Result<()> {
    if stride < 1 {
        bail!(ArgumentError::Stride);
    }
    if padding < 0 {
        bail!(ArgumentError::NegativePadding(padding));
    }

    Ok(())
}

fn valid_kernel<T>(kernel: &Grid<T>) -> Result<[usize; 2]> {
    match *kernel.sizes() {
        [kernel_height, kernel_width] => Ok([kernel_height, kernel_width]),
        _ => bail!(KernelRankError(kernel.rank())),
    }
}

/// `floor((dim + 2 * padding - kernel_dim) / stride) + 1` per spatial axis.
fn output_sizes(
    input_sizes: &[usize; 2],
    kernel_sizes: &[usize; 2],
    padding: usize,
    stride: usize,
) -> Result<[usize; 2], WindowError> {
    let padded = [
        input_sizes[0] + 2 * padding,
        input_sizes[1] + 2 * padding,
    ];

    if padded[0] < kernel_sizes[0] || padded[1] < kernel_sizes[1] {
        return Err(WindowError {
            kernel_sizes: kernel_sizes.to_vec(),
            padded_sizes: padded.to_vec(),
        });
    }

    Ok([
        (padded[0] - kernel_sizes[0]) / stride + 1,
        (padded[1] - kernel_sizes[1]) / stride + 1,
    ])
}

fn assemble<T: Copy>(values: Vec<T>, output_sizes: [usize; 2]) -> Result<Grid<T>> {
    let expected = output_sizes[0] * output_sizes[1];

    if values.len() != expected {
        bail!(DimensionMismatchError {
            produced: values.len(),
            expected,
        });
    }

    Ok(Grid::init(values, &output_sizes))
}

// --- Summary ---

/// Human-readable description of one convolution call. Cosmetic only: the
/// convolution functions never print, callers display this where the
/// original diagnostics would have gone.
pub struct ConvSummary {
    pub stride: usize,
    pub padding: isize,
    pub kernel_sizes: [usize; 2],
    pub input_sizes: Vec<usize>,
    pub output_sizes: [usize; 2],
}

impl ConvSummary {
    pub fn new<T: Copy>(
        grid: &Grid<T>,
        kernel: &Grid<T>,
        padding: isize,
        stride: usize,
    ) -> Result<ConvSummary> {
        valid_arguments(padding, stride)?;
        let kernel_sizes = valid_kernel(kernel)?;

        let input_sizes = match *grid.sizes() {
            [height, width] => [height, width],
            [height, width, _] => [height, width],
            _ => bail!(RankError::Grid(grid.rank())),
        };

        let output_sizes = output_sizes(&input_sizes, &kernel_sizes, padding as usize, stride)?;

        Ok(ConvSummary {
            stride,
            padding,
            kernel_sizes,
            input_sizes: grid.sizes().to_vec(),
            output_sizes,
        })
    }
}
