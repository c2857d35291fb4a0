use gridconv::{ConvSummary, Grid};
use image::{GrayImage, ImageBuffer, ImageError};
use std::{error::Error, fmt::Display, path::Path};

// Box-blurs a colour image through the channel-collapsing convolution: each
// output pixel is the rounded mean of a 3x3 neighbourhood, averaged across
// the three colour channels, so the result is greyscale.
fn main() -> Result<(), Box<dyn Error>> {
    let grid = read_image("assets/input.png")?;
    let kernel = Grid::<i32>::ones(&[3, 3])?;

    println!("{}", ConvSummary::new(&grid, &kernel, 1, 1)?);

    let blurred = grid.convolve(&kernel, 1, 1)?;
    write_image(&blurred, "assets/blur.png")?;

    Ok(())
}

fn read_image<P>(path: P) -> Result<Grid<i32>, Box<dyn Error>>
where
    P: AsRef<Path>,
{
    let img = image::open(path)?.to_rgb8();
    let (width, height) = img.dimensions();

    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for pixel in img.pixels() {
        data.extend(pixel.0.iter().map(|&channel| channel as i32));
    }

    let grid = Grid::new(&data, &[height as usize, width as usize, 3])?;
    Ok(grid)
}

fn write_image<P>(grid: &Grid<i32>, path: P) -> Result<(), ImageError>
where
    P: AsRef<Path> + Display,
{
    let sizes = grid.sizes();
    let width = sizes[1] as u32;
    let height = sizes[0] as u32;

    let u8_data = grid
        .data()
        .iter()
        .map(|&value| value.clamp(0, 255) as u8)
        .collect();

    let img: GrayImage =
        ImageBuffer::from_raw(width, height, u8_data).expect("Error saving output image.");

    println!("Image saved at {}", path);
    img.save(path)?;

    Ok(())
}
