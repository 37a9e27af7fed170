use anyhow::Result;
use console::Style;
use micrometry_core::calibrate::Lens;

pub fn run() -> Result<()> {
    let title = Style::new().cyan().bold();

    println!("{}", title.apply_to("Objective field-of-view diameters"));
    println!("{:>6}  {:>15}", "Lens", "FOV diameter");
    println!("{}", "-".repeat(23));
    for lens in Lens::ALL {
        println!("{:>6}  {:>12.2} mm", lens.to_string(), lens.field_diameter_mm());
    }
    println!();
    println!("Automatic calibration assumes the two marked points span");
    println!("the field-of-view diameter; the derived scale is in µm/pixel.");

    Ok(())
}
