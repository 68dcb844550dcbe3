use conv2d::{convolve, pad, single_conv, Kernel};
use rand::{distributions::Uniform, thread_rng};
use std::time::Instant;
use tracing::info;
use util::{Grid, Result};

const INPUT_SIZE: usize = 18;
const KERNEL_SIZE: usize = 3;

fn convolution_pass(grid: &Grid<i64>, kernel: &Kernel<i64>) -> Result<()> {
    let padded = pad(grid, kernel.margin())?;
    info!("grid padded");
    println!("{padded}");
    let start = Instant::now();
    let output = convolve(kernel, &padded)?;
    info!(elapsed = ?start.elapsed(), "convolution finished");
    println!("{output}");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let mut rng = thread_rng();

    let mut grid = Grid::<i64>::zero(INPUT_SIZE, INPUT_SIZE)?;
    println!("{grid}");
    println!("{}", Kernel::<i64>::zero(KERNEL_SIZE)?);

    grid.fill_random(Uniform::new_inclusive(0, 10), &mut rng);
    info!("grid populated with random values");
    println!("{grid}");

    grid.fill_with(|i, j| (i * j) as i64);
    println!("{grid}");
    let kernel = Kernel::from_fn(KERNEL_SIZE, |i, j| (i * j) as i64)?;
    println!("{kernel}");

    let probe = Grid::from_fn(KERNEL_SIZE, KERNEL_SIZE, |i, j| (i * j) as i64)?;
    println!("Convolution: {}", single_conv(&probe, &kernel)?);

    convolution_pass(&grid, &kernel)?;

    grid.fill_with(|i, j| {
        let (i, j) = (i as i64, j as i64);
        (i + j) * (j - i)
    });
    println!("{grid}");
    let kernel = Kernel::from_fn(KERNEL_SIZE, |i, j| {
        let (i, j) = (i as i64, j as i64);
        (i - j) * (j + i)
    })?;
    println!("{kernel}");

    convolution_pass(&grid, &kernel)
}
