use anyhow::Result;
use gridconv::Grid;

fn main() -> Result<()> {
    let grid = Grid::from_rows(&[vec![1, 2], vec![3, 4]])?;
    println!("{}", grid);
    println!("{}", grid.pad(1, 0)?);
    println!("{}", grid.pad(2, 9)?);

    let channelled = Grid::from_channels(&[vec![vec![1, 2, 3]], vec![vec![4, 5, 6]]])?;
    println!("{}", channelled);
    println!("{}", channelled.pad(1, 0)?);

    Ok(())
}
