/*!
```console
            _     _
  __ _ _ __(_) __| | ___ ___  _ ____   __
 / _` | '__| |/ _` |/ __/ _ \| '_ \ \ / /
| (_| | |  | | (_| | (_| (_) | | | \ V /
 \__, |_|  |_|\__,_|\___\___/|_| |_|\_/
 |___/
```

Averaged sliding-window convolution over 2D and 3D numeric grids.
*/

mod core;
pub use crate::core::errors;
pub use crate::core::ConvSummary;
pub use crate::core::Grid;
