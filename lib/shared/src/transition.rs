//! Show/hide transitions described as data.
//!
//! A [`Transition`] carries the timing and the start/end visual states for
//! each direction. Components stay mounted and switch between the `to`
//! states; the browser interpolates using the inline timing from
//! [`Transition::style`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn as_css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// One direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub easing: Easing,
    pub duration_ms: u32,
    /// Classes at the start of the phase.
    pub from: &'static str,
    /// Classes at the end of the phase.
    pub to: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub enter: Phase,
    pub leave: Phase,
}

impl Transition {
    /// Overlay fade.
    pub const BACKDROP: Transition = Transition {
        enter: Phase {
            easing: Easing::EaseOut,
            duration_ms: 300,
            from: "opacity-0",
            to: "opacity-100",
        },
        leave: Phase {
            easing: Easing::EaseIn,
            duration_ms: 200,
            from: "opacity-100",
            to: "opacity-0",
        },
    };

    /// Dialog panel fade and zoom.
    pub const PANEL: Transition = Transition {
        enter: Phase {
            easing: Easing::EaseOut,
            duration_ms: 300,
            from: "opacity-0 scale-95",
            to: "opacity-100 scale-100",
        },
        leave: Phase {
            easing: Easing::EaseIn,
            duration_ms: 200,
            from: "opacity-100 scale-100",
            to: "opacity-0 scale-95",
        },
    };

    fn phase(&self, shown: bool) -> &Phase {
        if shown {
            &self.enter
        } else {
            &self.leave
        }
    }

    /// Visual state classes to settle on.
    pub fn classes(&self, shown: bool) -> &'static str {
        self.phase(shown).to
    }

    pub fn style(&self, shown: bool) -> String {
        let phase = self.phase(shown);
        format!(
            "transition-duration: {}ms; transition-timing-function: {};",
            phase.duration_ms,
            phase.easing.as_css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_settles_on_phase_targets() {
        assert_eq!(Transition::PANEL.classes(true), "opacity-100 scale-100");
        assert_eq!(Transition::PANEL.classes(false), "opacity-0 scale-95");
        // Each phase ends where the opposite one starts.
        assert_eq!(Transition::PANEL.enter.from, Transition::PANEL.leave.to);
        assert_eq!(Transition::BACKDROP.leave.from, Transition::BACKDROP.enter.to);
    }

    #[test]
    fn enter_and_leave_timings_differ() {
        assert_eq!(
            Transition::BACKDROP.style(true),
            "transition-duration: 300ms; transition-timing-function: ease-out;"
        );
        assert_eq!(
            Transition::BACKDROP.style(false),
            "transition-duration: 200ms; transition-timing-function: ease-in;"
        );
    }
}
