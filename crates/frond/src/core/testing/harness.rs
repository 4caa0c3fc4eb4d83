use crate::{
    Scene,
    core::{
        NodeId,
        canvas::Canvas,
        event::{Button, Buttons, InputSample, key::Key},
    },
    geom::{Expanse, Point, Rect},
    widget::Element,
};

/// A headless scene driver. Holds a [`Scene`], the canvas it paints into and
/// the input state carried between samples. Every helper runs one full tick,
/// so after any call the layout, router state and pixels are current.
pub struct Harness {
    /// The scene under test.
    pub scene: Scene,
    /// The canvas painted by the most recent tick.
    pub canvas: Canvas,
    /// Surface size passed to every tick.
    pub size: Expanse,
    /// Pointer position and held buttons carried between samples.
    sample: InputSample,
}

impl Harness {
    /// Create a harness with a default surface of 200x200.
    pub fn new() -> Self {
        Self::with_size(Expanse::new(200, 200))
    }

    /// Create a harness for a surface of `size`.
    pub fn with_size(size: Expanse) -> Self {
        Self::with_scene(Scene::new(), size)
    }

    /// Drive an existing scene.
    pub fn with_scene(scene: Scene, size: Expanse) -> Self {
        Self {
            scene,
            canvas: Canvas::new(size),
            size,
            sample: InputSample::default(),
        }
    }

    /// Add a top-level element and run a tick so it is laid out.
    pub fn add(&mut self, element: impl Into<Element>) -> NodeId {
        let id = self.scene.add(element);
        self.tick();
        id
    }

    /// Run a tick with no new input.
    pub fn tick(&mut self) {
        let sample = InputSample {
            text: String::new(),
            keys: Vec::new(),
            ..self.sample.clone()
        };
        self.scene.tick(&sample, self.size, &mut self.canvas);
    }

    /// Resize the surface and run a tick.
    pub fn resize(&mut self, size: Expanse) {
        self.size = size;
        self.tick();
    }

    /// Move the pointer.
    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.sample.pointer = p.into();
        self.tick();
    }

    /// Move the pointer and press the left button.
    pub fn press(&mut self, p: impl Into<Point>) {
        self.sample.pointer = p.into();
        self.sample.buttons.insert(Button::Left);
        self.tick();
    }

    /// Move the pointer and release the left button.
    pub fn release(&mut self, p: impl Into<Point>) {
        self.sample.pointer = p.into();
        self.sample.buttons.remove(Button::Left);
        self.tick();
    }

    /// Press and release at the same point.
    pub fn click_at(&mut self, p: impl Into<Point>) {
        let p = p.into();
        self.press(p);
        self.release(p);
    }

    /// Click the center of a node's rectangle.
    pub fn click(&mut self, node: impl Into<NodeId>) {
        let center = self.rect(node).center();
        self.click_at(center);
    }

    /// Deliver typed text to the focus holder.
    pub fn type_text(&mut self, text: &str) {
        let sample = self.sample.clone().with_text(text);
        self.scene.tick(&sample, self.size, &mut self.canvas);
    }

    /// Deliver a special key to the focus holder.
    pub fn key(&mut self, k: Key) {
        let sample = self.sample.clone().with_key(k);
        self.scene.tick(&sample, self.size, &mut self.canvas);
    }

    /// Buttons currently held by the harness.
    pub fn buttons(&self) -> Buttons {
        self.sample.buttons
    }

    /// A node's rectangle, or a zero rect if the node is gone.
    pub fn rect(&self, node: impl Into<NodeId>) -> Rect {
        self.scene.rect(node).unwrap_or_default()
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
