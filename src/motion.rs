use thiserror::Error;

/// Duration used when the visitor prefers reduced motion. Opacity only,
/// no stagger.
pub const REDUCED_MOTION_DURATION_MS: u32 = 200;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MotionError {
    #[error("unknown motion profile: {0}")]
    UnknownProfile(String),
}

/// A snapshot of the visual properties a card animates between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    /// Horizontal offset in px.
    pub translate_x: f32,
    /// Vertical offset in px.
    pub translate_y: f32,
    pub scale: f32,
    /// Rotation in degrees.
    pub rotate: f32,
}

impl VisualState {
    /// The settled state every entrance animation ends in.
    pub const REST: VisualState = VisualState {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub const fn hidden() -> Self {
        VisualState {
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub const fn with_translate_y(self, y: f32) -> Self {
        VisualState {
            translate_y: y,
            ..self
        }
    }

    pub const fn with_translate_x(self, x: f32) -> Self {
        VisualState {
            translate_x: x,
            ..self
        }
    }

    pub const fn with_scale(self, scale: f32) -> Self {
        VisualState { scale, ..self }
    }

    /// True when the state carries no transform component, i.e. rendering
    /// it touches opacity only.
    pub fn is_transform_free(&self) -> bool {
        self.translate_x == 0.0 && self.translate_y == 0.0 && self.scale == 1.0 && self.rotate == 0.0
    }

    fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            self.translate_x, self.translate_y, self.scale, self.rotate
        )
    }
}

/// Spring timing parameters, unit mass. Projected onto a CSS timing
/// function when rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }

    pub fn critical_damping(&self) -> f32 {
        2.0 * self.stiffness.sqrt()
    }

    /// Underdamped springs oscillate, which reads as overshoot.
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Closest CSS easing: overshooting curve for underdamped springs,
    /// plain decelerating curve otherwise.
    pub fn css_timing_function(&self) -> &'static str {
        if self.is_underdamped() {
            "cubic-bezier(0.34, 1.56, 0.64, 1)"
        } else {
            "cubic-bezier(0.22, 1, 0.36, 1)"
        }
    }
}

/// A named, reusable animation contract: start and end visual state plus
/// an index-based delay. Pure and shared by reference; no card owns one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProfile {
    pub name: &'static str,
    pub initial: VisualState,
    pub entered: VisualState,
    pub base_delay_ms: u32,
    pub stagger_ms: u32,
    pub duration_ms: u32,
    pub spring: Option<SpringConfig>,
}

impl MotionProfile {
    /// Per-item delay, strictly non-decreasing in `index`.
    pub fn delay_ms(&self, index: usize) -> u32 {
        self.base_delay_ms + index as u32 * self.stagger_ms
    }

    /// Whether this profile animates the transform property at all.
    pub fn uses_transform(&self) -> bool {
        !(self.initial.is_transform_free() && self.entered.is_transform_free())
    }

    fn state(&self, entered: bool) -> &VisualState {
        if entered {
            &self.entered
        } else {
            &self.initial
        }
    }

    /// Inline style for the current visual state. Transform is omitted
    /// entirely for transform-free profiles so reduced-motion rendering
    /// never emits one.
    pub fn style_for(&self, entered: bool) -> String {
        let state = self.state(entered);
        if self.uses_transform() {
            format!(
                "opacity: {}; transform: {};",
                state.opacity,
                state.transform()
            )
        } else {
            format!("opacity: {};", state.opacity)
        }
    }

    /// CSS transition declaration with this card's computed delay.
    pub fn transition_for(&self, index: usize) -> String {
        let delay = self.delay_ms(index);
        let easing = self
            .spring
            .map(|s| s.css_timing_function())
            .unwrap_or("ease-out");
        if self.uses_transform() {
            format!(
                "transition: opacity {d}ms {easing} {delay}ms, transform {d}ms {easing} {delay}ms;",
                d = self.duration_ms
            )
        } else {
            format!(
                "transition: opacity {d}ms {easing} {delay}ms;",
                d = self.duration_ms
            )
        }
    }

    /// Full inline style for one card: visual state plus transition.
    pub fn inline_style(&self, entered: bool, index: usize) -> String {
        format!("{} {}", self.style_for(entered), self.transition_for(index))
    }
}

/// Fade in while sliding up. Used for headings and skill groups.
pub static FADE_UP: MotionProfile = MotionProfile {
    name: "fade-up",
    initial: VisualState::hidden().with_translate_y(60.0),
    entered: VisualState::REST,
    base_delay_ms: 0,
    stagger_ms: 150,
    duration_ms: 800,
    spring: Some(SpringConfig::new(120.0, 14.0)),
};

/// Scale up from slightly shrunken. Used for work and certification cards.
pub static BOUNCE_IN: MotionProfile = MotionProfile {
    name: "bounce-in",
    initial: VisualState::hidden().with_scale(0.85),
    entered: VisualState::REST,
    base_delay_ms: 0,
    stagger_ms: 130,
    duration_ms: 700,
    spring: Some(SpringConfig::new(220.0, 18.0)),
};

/// Rise, fade and settle. Used for project and service cards.
pub static CARD_POP: MotionProfile = MotionProfile {
    name: "card-pop",
    initial: VisualState::hidden().with_scale(0.92).with_translate_y(70.0),
    entered: VisualState::REST,
    base_delay_ms: 0,
    stagger_ms: 130,
    duration_ms: 700,
    spring: Some(SpringConfig::new(280.0, 18.0)),
};

/// Container-level fade. Zero delay so the container is never later than
/// its first child; `stagger_ms` is what its children inherit.
pub static CONTAINER_STAGGER: MotionProfile = MotionProfile {
    name: "container-stagger",
    initial: VisualState::hidden(),
    entered: VisualState::REST,
    base_delay_ms: 0,
    stagger_ms: 140,
    duration_ms: 400,
    spring: None,
};

/// Accessibility fallback: opacity-only, fixed short duration, no
/// stagger. Substituted for every profile when the visitor prefers
/// reduced motion.
pub static REDUCED_MOTION: MotionProfile = MotionProfile {
    name: "reduced-motion",
    initial: VisualState::hidden(),
    entered: VisualState::REST,
    base_delay_ms: 0,
    stagger_ms: 0,
    duration_ms: REDUCED_MOTION_DURATION_MS,
    spring: None,
};

/// Look up a profile by name. Unknown names are a programming error and
/// fail loudly rather than degrading to some default.
pub fn resolve(name: &str) -> Result<&'static MotionProfile, MotionError> {
    match name {
        "fade-up" => Ok(&FADE_UP),
        "bounce-in" => Ok(&BOUNCE_IN),
        "card-pop" => Ok(&CARD_POP),
        "container-stagger" => Ok(&CONTAINER_STAGGER),
        "reduced-motion" => Ok(&REDUCED_MOTION),
        other => Err(MotionError::UnknownProfile(other.to_string())),
    }
}

/// Resolve honoring the ambient reduced-motion preference. The name must
/// still be registered; the preference only changes which profile comes
/// back.
pub fn resolve_with(
    name: &str,
    reduced_motion: bool,
) -> Result<&'static MotionProfile, MotionError> {
    let profile = resolve(name)?;
    if reduced_motion {
        Ok(&REDUCED_MOTION)
    } else {
        Ok(profile)
    }
}

/// The five card roles a collection can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Job,
    Certification,
    SkillGroup,
    Project,
    Service,
}

impl Role {
    /// Which registered profile this role's cards enter with.
    pub fn profile_name(&self) -> &'static str {
        match self {
            Role::Job | Role::Certification => "bounce-in",
            Role::SkillGroup => "fade-up",
            Role::Project | Role::Service => "card-pop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_profiles() -> Vec<&'static MotionProfile> {
        vec![
            &FADE_UP,
            &BOUNCE_IN,
            &CARD_POP,
            &CONTAINER_STAGGER,
            &REDUCED_MOTION,
        ]
    }

    #[test]
    fn test_delay_non_decreasing() {
        for profile in all_profiles() {
            for i in 0..20 {
                assert!(
                    profile.delay_ms(i) <= profile.delay_ms(i + 1),
                    "{} delay must be non-decreasing",
                    profile.name
                );
            }
        }
    }

    #[test]
    fn test_delay_formula() {
        assert_eq!(FADE_UP.delay_ms(0), 0);
        assert_eq!(FADE_UP.delay_ms(3), 450);
        assert_eq!(BOUNCE_IN.delay_ms(2), 260);
    }

    #[test]
    fn test_resolve_known_profiles() {
        for name in [
            "fade-up",
            "bounce-in",
            "card-pop",
            "container-stagger",
            "reduced-motion",
        ] {
            let profile = resolve(name).expect("registered profile should resolve");
            assert_eq!(profile.name, name);
        }
    }

    #[test]
    fn test_resolve_unknown_profile_fails_loudly() {
        let err = resolve("wobble").unwrap_err();
        assert_eq!(err, MotionError::UnknownProfile("wobble".to_string()));
        // no silent fallback for typos either
        assert!(resolve("fadeup").is_err());
        assert!(resolve("").is_err());
    }

    #[test]
    fn test_reduced_motion_substitution() {
        let profile = resolve_with("card-pop", true).unwrap();
        assert_eq!(profile.name, "reduced-motion");
        // unknown names still fail even with the preference set
        assert!(resolve_with("wobble", true).is_err());
        // preference off returns the named profile
        let profile = resolve_with("card-pop", false).unwrap();
        assert_eq!(profile.name, "card-pop");
    }

    #[test]
    fn test_reduced_motion_is_opacity_only() {
        assert!(!REDUCED_MOTION.uses_transform());
        assert_eq!(REDUCED_MOTION.stagger_ms, 0);
        for i in 0..10 {
            assert_eq!(REDUCED_MOTION.delay_ms(i), 0);
            let style = REDUCED_MOTION.inline_style(false, i);
            assert!(!style.contains("transform"));
            assert!(!style.contains("scale"));
            assert!(!style.contains("translate"));
            assert!(!style.contains("rotate"));
        }
    }

    #[test]
    fn test_entrance_profiles_use_transform() {
        for profile in [&FADE_UP, &BOUNCE_IN, &CARD_POP] {
            assert!(profile.uses_transform());
            let style = profile.style_for(false);
            assert!(style.contains("transform"));
            assert!(style.contains("opacity: 0"));
            let style = profile.style_for(true);
            assert!(style.contains("opacity: 1"));
        }
    }

    #[test]
    fn test_inline_style_idempotent() {
        for profile in all_profiles() {
            for entered in [false, true] {
                for i in 0..5 {
                    assert_eq!(
                        profile.inline_style(entered, i),
                        profile.inline_style(entered, i)
                    );
                }
            }
        }
    }

    #[test]
    fn test_container_fades_before_or_with_first_child() {
        for profile in [&FADE_UP, &BOUNCE_IN, &CARD_POP] {
            assert!(CONTAINER_STAGGER.delay_ms(0) <= profile.delay_ms(0));
        }
    }

    #[test]
    fn test_transition_carries_computed_delay() {
        let transition = BOUNCE_IN.transition_for(3);
        assert!(transition.contains("390ms"), "got: {transition}");
        let transition = FADE_UP.transition_for(0);
        assert!(transition.contains(" 0ms"), "got: {transition}");
    }

    #[test]
    fn test_spring_damping_classification() {
        // entrance springs overshoot for the bouncy feel
        assert!(SpringConfig::new(220.0, 18.0).is_underdamped());
        assert!(SpringConfig::new(120.0, 14.0).is_underdamped());
        // an overdamped spring falls back to the decelerating curve
        let sluggish = SpringConfig::new(100.0, 40.0);
        assert!(!sluggish.is_underdamped());
        assert!(sluggish.css_timing_function().starts_with("cubic-bezier(0.22"));
    }

    #[test]
    fn test_role_profiles_are_registered() {
        for role in [
            Role::Job,
            Role::Certification,
            Role::SkillGroup,
            Role::Project,
            Role::Service,
        ] {
            assert!(resolve(role.profile_name()).is_ok());
        }
    }
}
