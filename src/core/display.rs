use prettytable::{
    format::consts::FORMAT_BOX_CHARS,
    {Cell, Row, Table},
};
use std::{
    any::type_name,
    fmt::{Debug, Display, Formatter, Result},
};

use crate::core::{conv::ConvSummary, grid::Grid};

impl<T: Debug + Copy> Debug for Grid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Grid")
            .field("dtype", &type_name::<T>())
            .field("dims", &self.rank())
            .field("elems", &self.numel())
            .field("shape", &self.sizes())
            .finish()
    }
}

impl<T: Display + Debug + Copy> Display for Grid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self.sizes() {
            [width] => {
                let row = Row::from((0..width).map(|j| Cell::from(&self.idx(&[j]))));
                write!(f, "{}", set_style(Table::init(vec![row])))?;
            }
            [height, width] => {
                let rows = (0..height)
                    .map(|i| Row::from((0..width).map(|j| Cell::from(&self.idx(&[i, j])))))
                    .collect();

                write!(f, "{}", set_style(Table::init(rows)))?;
            }
            [height, width, channels] => {
                // Channel vectors render as a nested table per cell.
                let rows = (0..height)
                    .map(|i| {
                        Row::from((0..width).map(|j| {
                            let cells =
                                (0..channels).map(|k| Cell::from(&self.idx(&[i, j, k])));

                            set_style(Table::init(vec![Row::from(cells)]))
                        }))
                    })
                    .collect();

                write!(f, "{}", set_style(Table::init(rows)))?;
            }
            _ => {}
        }

        writeln!(f, "{:?}", self)
    }
}

fn set_style(mut table: Table) -> Table {
    table.set_format(*FORMAT_BOX_CHARS);
    table
}

impl Display for ConvSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let input = self
            .input_sizes
            .iter()
            .map(|size| size.to_string())
            .collect::<Vec<String>>()
            .join(" x ");

        writeln!(f, "Stride size: \t{}", self.stride)?;
        writeln!(f, "Padding size: \t{}", self.padding)?;
        writeln!(
            f,
            "Kernel dims: \t{} x {}",
            self.kernel_sizes[0], self.kernel_sizes[1]
        )?;
        writeln!(f, "Grid dims: \t{}", input)?;
        writeln!(
            f,
            "Output dims: \t{} x {}",
            self.output_sizes[0], self.output_sizes[1]
        )
    }
}
