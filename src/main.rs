use std::{process, time::Instant};

use clap::{App, Arg, ArgMatches};
use log::{error, info};
use whitted::{scene::MAX_DIVISIONS, showcase::showcase, texture::Texture, RenderError};

fn parse<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> Result<T, RenderError> {
    let value = matches.value_of(name).unwrap_or_default();
    value.parse().map_err(|_| {
        RenderError::InvalidOptions(format!("{} must be a positive integer, got {:?}", name, value))
    })
}

fn texture(matches: &ArgMatches, name: &str) -> Result<Option<Texture>, RenderError> {
    matches.value_of(name).map(Texture::open).transpose()
}

fn render(matches: &ArgMatches) -> Result<(), RenderError> {
    let now = Instant::now();

    let divisions: u32 = parse(matches, "divisions")?;
    let depth: u32 = parse(matches, "depth")?;
    if divisions == 0 || depth == 0 {
        return Err(RenderError::InvalidOptions(
            "divisions and depth must be at least 1".into(),
        ));
    }
    if divisions > MAX_DIVISIONS {
        return Err(RenderError::InvalidOptions(format!(
            "divisions must be at most {}",
            MAX_DIVISIONS
        )));
    }

    let mut scene = showcase(
        texture(matches, "wall-texture")?,
        texture(matches, "earth-texture")?,
    );
    scene.camera.divisions = divisions;
    scene.options.max_ray_depth = depth;
    scene.options.clamp_diffuse = matches.is_present("clamp-diffuse");
    if matches.is_present("no-fog") {
        scene.options.fog = None;
    }

    info!(
        "Scene constructed in {}s ({} objects)",
        now.elapsed().as_secs_f32(),
        scene.objects.len()
    );

    let output = matches.value_of("output").unwrap_or("render.png");
    scene.render_to(output)?;
    info!(
        "Rendered {0}x{0} to {1} in {2}s",
        divisions,
        output,
        now.elapsed().as_secs_f32()
    );

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("Whitted Ray Tracer")
        .version("0.1")
        .about("Renders the demo scene with recursive reflections, refraction and shadows")
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .value_name("FILE")
                .help("The output image; the format follows the extension")
                .default_value("render.png"),
        )
        .arg(
            Arg::with_name("divisions")
                .long("divisions")
                .short("d")
                .value_name("N")
                .help("Cells along each side of the image plane")
                .default_value("500"),
        )
        .arg(
            Arg::with_name("depth")
                .long("depth")
                .value_name("N")
                .help("Maximum depth of the ray tree")
                .default_value("4"),
        )
        .arg(
            Arg::with_name("wall-texture")
                .long("wall-texture")
                .value_name("FILE")
                .help("Image for the back wall"),
        )
        .arg(
            Arg::with_name("earth-texture")
                .long("earth-texture")
                .value_name("FILE")
                .help("Equirectangular image for the globe"),
        )
        .arg(
            Arg::with_name("no-fog")
                .long("no-fog")
                .help("Skip the depth and height fade"),
        )
        .arg(
            Arg::with_name("clamp-diffuse")
                .long("clamp-diffuse")
                .help("Clamp diffuse lighting at zero for surfaces facing away from a light"),
        )
        .get_matches();

    if let Err(e) = render(&matches) {
        error!("Failed to render: {}", e);
        process::exit(1);
    }
}
