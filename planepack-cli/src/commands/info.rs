//! Info command implementation.

use planepack_image::Container;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct PlaneInfo {
    plane: &'static str,
    aux_bytes: usize,
    data_bytes: usize,
}

#[derive(Serialize)]
struct ContainerInfo {
    file: String,
    width: u32,
    height: u32,
    plane_bytes: usize,
    file_bytes: u64,
    planes: Vec<PlaneInfo>,
}

const PLANE_NAMES: [&str; 3] = ["R", "G", "B"];

pub fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let raw = fs::read(input)?;
    let container = Container::from_bytes(&raw)?;

    let info = ContainerInfo {
        file: input.display().to_string(),
        width: container.width(),
        height: container.height(),
        plane_bytes: container.plane_len()?,
        file_bytes: raw.len() as u64,
        planes: container
            .planes()
            .iter()
            .zip(PLANE_NAMES)
            .map(|(plane, name)| PlaneInfo {
                plane: name,
                aux_bytes: plane.aux.len(),
                data_bytes: plane.data.len(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Container Information");
    println!("=====================");
    println!("File: {}", info.file);
    println!("Dimensions: {}x{}", info.width, info.height);
    println!("Plane size: {} bytes", info.plane_bytes);
    println!("File size: {} bytes", info.file_bytes);
    println!();
    println!("{:>6} {:>12} {:>12}", "Plane", "Aux", "Data");
    for plane in &info.planes {
        println!(
            "{:>6} {:>12} {:>12}",
            plane.plane, plane.aux_bytes, plane.data_bytes
        );
    }

    Ok(())
}
