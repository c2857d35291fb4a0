use anyhow::Result;
use gridconv::{ConvSummary, Grid};

fn main() -> Result<()> {
    let grid = Grid::from_rows(&[
        vec![1, 2, 3, 4],
        vec![5, 6, 7, 8],
        vec![9, 10, 11, 12],
        vec![13, 14, 15, 16],
    ])?;
    let kernel = Grid::from_rows(&[vec![1, 0], vec![0, 1]])?;

    println!("{}", ConvSummary::new(&grid, &kernel, 0, 1)?);
    let output = grid.convolve_2d(&kernel, 0, 1)?;
    println!("{}", output);

    println!("{}", ConvSummary::new(&grid, &kernel, 1, 2)?);
    let strided = grid.convolve(&kernel, 1, 2)?;
    println!("{}", strided);

    let channelled = Grid::from_channels(&[
        vec![vec![1, 9], vec![2, 8], vec![3, 7]],
        vec![vec![4, 6], vec![5, 5], vec![6, 4]],
        vec![vec![7, 3], vec![8, 2], vec![9, 1]],
    ])?;
    let box_kernel = Grid::<i32>::ones(&[2, 2])?;

    println!("{}", ConvSummary::new(&channelled, &box_kernel, 0, 1)?);
    let collapsed = channelled.convolve(&box_kernel, 0, 1)?;
    println!("{}", collapsed);

    Ok(())
}
