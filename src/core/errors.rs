use thiserror::Error;

// --- Construction ---

#[derive(Error, Debug)]
#[error("Data length ({data_length}) does not match size of grid ({grid_size}).")]
pub struct InvalidDataLengthError {
    pub data_length: usize,
    pub grid_size: usize,
}

#[derive(Error, Debug)]
pub enum RaggedGridError {
    #[error("Row {row} has length {length}, but row 0 has length {expected}.")]
    Rows {
        row: usize,
        length: usize,
        expected: usize,
    },

    #[error("Cell ({row}, {column}) has {channels} channels, but cell (0, 0) has {expected}.")]
    Channels {
        row: usize,
        column: usize,
        channels: usize,
        expected: usize,
    },
}

#[derive(Error, Debug)]
#[error("Grid extents {0:?} are empty or contain a zero extent.")]
pub struct EmptyGridError(pub Vec<usize>);

// --- Rank ---

#[derive(Error, Debug)]
pub enum RankError {
    #[error("Unsupported rank ({0}). Grids must be rank 2 or rank 3.")]
    Grid(usize),

    #[error("convolve_2d only convolves rank-2 grids, got rank {0}. Use convolve_3d for channelled grids.")]
    SpatialOnly(usize),
}

#[derive(Error, Debug)]
#[error("Kernels must be rank 2, got rank {0}.")]
pub struct KernelRankError(pub usize);

// --- Arguments ---

#[derive(Error, Debug)]
pub enum ArgumentError {
    #[error("Padding width cannot be negative, got {0}.")]
    NegativePadding(isize),

    #[error("Stride must be at least 1.")]
    Stride,
}

#[derive(Error, Debug)]
#[error("Kernel sizes {kernel_sizes:?} exceed the padded grid sizes {padded_sizes:?}. No window fits.")]
pub struct WindowError {
    pub kernel_sizes: Vec<usize>,
    pub padded_sizes: Vec<usize>,
}

// --- Index ---

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Index {index} is out of range for dimension {dimension}, of size {size}.")]
    OutOfRange {
        index: usize,
        dimension: usize,
        size: usize,
    },

    #[error("Number of indices ({num_indices}) does not match the number of dimensions ({num_dimensions}).")]
    IndicesLength {
        num_indices: usize,
        num_dimensions: usize,
    },
}

// --- Conv ---

#[derive(Error, Debug)]
#[error("Sliding window produced {produced} values, expected {expected}. This is a bug, please report it.")]
pub struct DimensionMismatchError {
    pub produced: usize,
    pub expected: usize,
}

// --- Misc ---

#[derive(Error, Debug)]
#[error("Cannot convert {value} from `f64` to type {dtype}.")]
pub struct RoundedCastError {
    pub value: f64,
    pub dtype: &'static str,
}

#[derive(Error, Debug)]
#[error("Cannot convert a value of type {dtype} to `f64` for accumulation.")]
pub struct AccumulateCastError {
    pub dtype: &'static str,
}
