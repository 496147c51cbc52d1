use crate::models::icon::{IconDefinition, IconFile};
use embedded_graphics::pixelcolor::Rgb888;
use log::{debug, info};
use std::path::Path;

/// An animated icon with its current frame position.
#[derive(Clone, Debug)]
pub struct Icon {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub frame_duration_ms: u64,
    frames: Vec<Vec<Rgb888>>,
    current_frame: usize,
}

impl Icon {
    pub fn new(
        name: &str,
        width: u32,
        height: u32,
        frame_duration_ms: u64,
        frames: Vec<Vec<Rgb888>>,
    ) -> Result<Self, String> {
        if frames.is_empty() {
            return Err(format!("Icon '{}' has no frames", name));
        }

        let expected = width
            .checked_mul(height)
            .and_then(|pixels| usize::try_from(pixels).ok())
            .ok_or_else(|| format!("Icon '{}' is too large", name))?;
        if let Some((index, frame)) = frames
            .iter()
            .enumerate()
            .find(|(_, frame)| frame.len() != expected)
        {
            return Err(format!(
                "Icon '{}' frame {} has {} pixels, expected {} ({}x{})",
                name,
                index,
                frame.len(),
                expected,
                width,
                height
            ));
        }

        Ok(Self {
            name: name.to_string(),
            width,
            height,
            frame_duration_ms,
            frames,
            current_frame: 0,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Row-major pixels of the frame currently shown
    pub fn current_frame_pixels(&self) -> &[Rgb888] {
        &self.frames[self.current_frame]
    }

    pub fn next_frame(&mut self) {
        self.current_frame = (self.current_frame + 1) % self.frames.len();
    }
}

impl TryFrom<IconDefinition> for Icon {
    type Error = String;

    fn try_from(definition: IconDefinition) -> Result<Self, Self::Error> {
        let frames = definition
            .frames
            .iter()
            .map(|frame| {
                frame
                    .iter()
                    .map(|[r, g, b]| Rgb888::new(*r, *g, *b))
                    .collect()
            })
            .collect();

        Icon::new(
            &definition.name,
            definition.width,
            definition.height,
            definition.frame_duration_ms,
            frames,
        )
    }
}

/// Indexed collection of icons shared by all slots.
#[derive(Clone, Debug, Default)]
pub struct IconStore {
    icons: Vec<Icon>,
}

impl IconStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the icons compiled into the binary
    pub fn with_builtin() -> Self {
        let mut store = Self::new();
        for icon in builtin_icons() {
            store.add(icon);
        }
        store
    }

    /// Adds an icon, replacing any icon with the same name. Returns its index.
    pub fn add(&mut self, icon: Icon) -> usize {
        if let Some(index) = self.find(&icon.name) {
            debug!("Replacing icon '{}' at index {}", icon.name, index);
            self.icons[index] = icon;
            index
        } else {
            self.icons.push(icon);
            self.icons.len() - 1
        }
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.icons.iter().position(|icon| icon.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&Icon> {
        self.icons.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Icon> {
        self.icons.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Parse an icon file and add its icons to the store.
    pub fn load_json(&mut self, json: &str) -> Result<usize, String> {
        let file: IconFile =
            serde_json::from_str(json).map_err(|e| format!("Invalid icon file: {}", e))?;

        // Nothing is added unless every icon in the file is valid
        let icons = file
            .icons
            .into_iter()
            .map(Icon::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let count = icons.len();
        for icon in icons {
            self.add(icon);
        }
        Ok(count)
    }

    pub fn load_file(&mut self, path: &Path) -> Result<usize, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read icon file {}: {}", path.display(), e))?;
        let count = self.load_json(&json)?;
        info!("Loaded {} icons from {}", count, path.display());
        Ok(count)
    }
}

fn builtin_icons() -> Vec<Icon> {
    const HEART: [&str; 8] = [
        "........",
        ".##..##.",
        "########",
        "########",
        ".######.",
        "..####..",
        "...##...",
        "........",
    ];
    const HEART_SMALL: [&str; 8] = [
        "........",
        "........",
        "..#..#..",
        ".######.",
        ".######.",
        "..####..",
        "...##...",
        "........",
    ];
    const BELL: [&str; 8] = [
        "...##...",
        "..####..",
        ".######.",
        ".######.",
        ".######.",
        "########",
        "........",
        "...##...",
    ];
    const BELL_SWING: [&str; 8] = [
        "...##...",
        "...####.",
        "..######",
        "..######",
        ".######.",
        "#######.",
        "........",
        "..##....",
    ];

    let red = Rgb888::new(255, 0, 40);
    let yellow = Rgb888::new(255, 200, 0);

    let icons = [
        Icon::new(
            "heart",
            8,
            8,
            400,
            vec![mask(&HEART, red), mask(&HEART_SMALL, red)],
        ),
        Icon::new(
            "bell",
            8,
            8,
            250,
            vec![mask(&BELL, yellow), mask(&BELL_SWING, yellow)],
        ),
    ];

    icons.into_iter().flatten().collect()
}

fn mask(rows: &[&str; 8], color: Rgb888) -> Vec<Rgb888> {
    rows.iter()
        .flat_map(|row| row.chars())
        .map(|c| if c == '#' { color } else { Rgb888::new(0, 0, 0) })
        .collect()
}
