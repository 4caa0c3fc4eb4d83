//! Run a demo scene headless with scripted input and write frames as PNG.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use clap::{Parser, ValueEnum};
use frond::{
    Canvas, NodeId, Scene,
    config::SceneConfig,
    event::{Button, InputSample, key::Key},
    font::{BlockFont, FontBackend, TtfFont},
    geom::{Expanse, Point},
    logging,
};
use frond_examples::{counter, form, gallery, palette};
use image::RgbaImage;
use tracing::info;

/// Which demo to run.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Demo {
    /// Click counter.
    Counter,
    /// Shapes and indicators.
    Gallery,
    /// Form controls.
    Form,
}

/// CLI flags for the frame gym.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Demo scene.
    #[clap(value_enum, default_value = "counter")]
    demo: Demo,

    /// Output directory for PNG frames.
    #[clap(short, long, default_value = "frames")]
    out: PathBuf,

    /// Surface width.
    #[clap(long, default_value_t = 480)]
    width: u32,

    /// Surface height.
    #[clap(long, default_value_t = 360)]
    height: u32,

    /// Write every frame, not just the last.
    #[clap(short, long)]
    all: bool,

    /// TrueType font to use instead of the built-in block font.
    #[clap(long)]
    font: Option<PathBuf>,

    /// JSON scene config.
    #[clap(long)]
    config: Option<PathBuf>,

    /// Log filter directives.
    #[clap(long, default_value = "frond=info,framegym=info")]
    log: String,
}

/// One scripted step.
enum Step {
    /// Move the pointer.
    Move(Point),
    /// Press and release at a point.
    Click(Point),
    /// Press, move to a point, release there.
    Drag(Point, Point),
    /// Type text.
    Type(&'static str),
    /// Press a key.
    Key(Key),
}

/// Drives a scene one sample at a time and saves frames.
struct Gym {
    /// The scene under test.
    scene: Scene,
    /// Frame buffer.
    canvas: Canvas,
    /// Surface size.
    size: Expanse,
    /// Current pointer.
    pointer: Point,
    /// Output directory.
    out: PathBuf,
    /// Save every frame.
    all: bool,
}

impl Gym {
    /// Tick once with `sample` and save the frame if requested.
    fn tick(&mut self, sample: &InputSample) -> Result<()> {
        self.pointer = sample.pointer;
        self.scene.tick(sample, self.size, &mut self.canvas);
        if self.all {
            let path = self.out.join(format!("frame-{:04}.png", self.scene.frames()));
            save(&self.canvas, &path)?;
        }
        Ok(())
    }

    /// Sample at `p` with the left button up or down.
    fn at(p: Point, down: bool) -> InputSample {
        let sample = InputSample::at(p);
        if down {
            sample.with_buttons(Button::Left)
        } else {
            sample
        }
    }

    /// Run one scripted step.
    fn step(&mut self, step: &Step) -> Result<()> {
        match step {
            Step::Move(p) => self.tick(&Self::at(*p, false)),
            Step::Click(p) => {
                self.tick(&Self::at(*p, true))?;
                self.tick(&Self::at(*p, false))
            }
            Step::Drag(from, to) => {
                self.tick(&Self::at(*from, true))?;
                self.tick(&Self::at(*to, true))?;
                self.tick(&Self::at(*to, false))
            }
            Step::Type(s) => self.tick(&InputSample::at(self.pointer).with_text(*s)),
            Step::Key(k) => self.tick(&InputSample::at(self.pointer).with_key(*k)),
        }
    }

    /// Center of a node, as of the last layout.
    fn center(&self, node: NodeId) -> Result<Point> {
        self.scene
            .rect(node)
            .map(|r| r.center())
            .ok_or_else(|| anyhow!("node {node:?} has no rectangle"))
    }
}

/// Write a canvas as PNG.
fn save(canvas: &Canvas, path: &Path) -> Result<()> {
    let size = canvas.size();
    let img = RgbaImage::from_raw(size.w, size.h, canvas.to_rgba8())
        .ok_or_else(|| anyhow!("frame buffer does not match its size"))?;
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))
}

/// Build the demo and return the script to run against it.
fn script(gym: &mut Gym, demo: Demo) -> Result<Vec<Step>> {
    Ok(match demo {
        Demo::Counter => {
            let c = counter::build(&mut gym.scene)?;
            gym.tick(&InputSample::default())?;
            let plus = gym.center(c.increment)?;
            let minus = gym.center(c.decrement)?;
            let mut steps: Vec<Step> = (0..12).map(|_| Step::Click(plus)).collect();
            steps.push(Step::Click(minus));
            steps.push(Step::Move(plus));
            steps
        }
        Demo::Gallery => {
            let g = gallery::build(&mut gym.scene)?;
            gym.tick(&InputSample::default())?;
            let track = gym
                .scene
                .rect(g.slider)
                .ok_or_else(|| anyhow!("slider was not laid out"))?;
            let y = track.center().y;
            vec![
                Step::Click(gym.center(g.circles[0])?),
                Step::Drag(
                    Point::new(track.tl.x, y),
                    Point::new(track.tl.x + (track.w * 3 / 4) as i32, y),
                ),
                Step::Drag(
                    Point::new(track.tl.x + 10, y),
                    Point::new(track.tl.x + track.w as i32 + 40, y),
                ),
            ]
        }
        Demo::Form => {
            let f = form::build(&mut gym.scene)?;
            gym.tick(&InputSample::default())?;
            let role = gym
                .scene
                .rect(f.role)
                .ok_or_else(|| anyhow!("dropdown was not laid out"))?;
            let second_item = Point::new(role.center().x, role.tl.y + role.h as i32 * 5 / 2);
            vec![
                Step::Click(gym.center(f.name)?),
                Step::Type("Ada Lovelace"),
                Step::Key(Key::Enter),
                Step::Click(gym.center(f.role)?),
                Step::Click(second_item),
                Step::Click(gym.center(f.plans[1])?),
                Step::Click(gym.center(f.submit)?),
            ]
        }
    })
}

/// Run the frame gym.
pub fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log)?;

    let mut config = match &args.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if args.config.is_none() {
        config.background = palette::BACKGROUND;
    }
    let font: Box<dyn FontBackend> = match &args.font {
        Some(path) => Box::new(TtfFont::load(path)?),
        None => Box::new(BlockFont),
    };
    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    let size = Expanse::new(args.width, args.height);
    let mut gym = Gym {
        scene: Scene::with_parts(font, config),
        canvas: Canvas::new(size),
        size,
        pointer: Point::zero(),
        out: args.out.clone(),
        all: args.all,
    };
    let steps = script(&mut gym, args.demo)?;
    for step in &steps {
        gym.step(step)?;
    }

    let last = args.out.join(format!("{:?}.png", args.demo).to_lowercase());
    save(&gym.canvas, &last)?;
    info!(frames = gym.scene.frames(), path = %last.display(), "done");
    print!("{}", gym.scene.dump()?);
    Ok(())
}
