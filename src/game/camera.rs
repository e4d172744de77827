//=========================================================================
// Follow Camera
//=========================================================================
//
// Smoothly tracks a target and keeps the view inside the world.
//
// Each tick the scroll closes `lerp` of the distance to the point that
// would centre the target, then clamps to [0, world - viewport] per axis.
// A world smaller than the viewport pins that axis to 0.
//
//=========================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    scroll: (f32, f32),
    viewport: (f32, f32),
    world: (f32, f32),
    lerp: f32,
}

impl Camera {
    pub fn new(viewport: (f32, f32), world: (f32, f32), lerp: f32) -> Self {
        Self {
            scroll: (0.0, 0.0),
            viewport,
            world,
            lerp: lerp.clamp(0.0, 1.0),
        }
    }

    /// Top-left of the view in world pixels.
    pub fn scroll(&self) -> (f32, f32) {
        self.scroll
    }

    /// Jumps straight to the target.
    pub fn snap_to(&mut self, target: (f32, f32)) {
        self.scroll = self.clamp(self.centred_on(target));
    }

    /// Moves one lerp step toward the target and returns the new scroll.
    pub fn follow(&mut self, target: (f32, f32)) -> (f32, f32) {
        let goal = self.centred_on(target);
        let next = (
            self.scroll.0 + (goal.0 - self.scroll.0) * self.lerp,
            self.scroll.1 + (goal.1 - self.scroll.1) * self.lerp,
        );
        self.scroll = self.clamp(next);
        self.scroll
    }

    fn centred_on(&self, target: (f32, f32)) -> (f32, f32) {
        (target.0 - self.viewport.0 / 2.0, target.1 - self.viewport.1 / 2.0)
    }

    fn clamp(&self, scroll: (f32, f32)) -> (f32, f32) {
        let max_x = (self.world.0 - self.viewport.0).max(0.0);
        let max_y = (self.world.1 - self.viewport.1).max(0.0);
        (scroll.0.clamp(0.0, max_x), scroll.1.clamp(0.0, max_y))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
