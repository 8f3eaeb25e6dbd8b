mod core;
mod theme;
mod tool;

pub use self::core::*;
pub use theme::*;
pub use tool::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
        assert!((r.right() - 810.0).abs() < f64::EPSILON);
        assert!((r.bottom() - 620.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rect_contains_rect() {
        let outer = Rect {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
        };
        let inner = Rect {
            x: 10.0,
            y: 10.0,
            width: 90.0,
            height: 90.0,
        };
        let spill = Rect {
            x: 50.0,
            y: 50.0,
            width: 60.0,
            height: 10.0,
        };
        assert!(outer.contains_rect(&inner));
        assert!(!outer.contains_rect(&spill));
    }

    #[test]
    fn view_id_display() {
        assert_eq!(ViewId(42).to_string(), "view-42");
    }

    #[test]
    fn tool_id_serializes_as_plain_string() {
        let id = ToolId::new("email");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"email\"");
        let parsed: ToolId = serde_json::from_str("\"timer\"").unwrap();
        assert_eq!(parsed.as_str(), "timer");
    }

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let t: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(t, Theme::Light);
    }

    #[test]
    fn theme_toggle_and_parse() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn theme_body_class() {
        assert_eq!(Theme::Dark.body_class(), "dark-theme");
        assert_eq!(Theme::Light.body_class(), "light-theme");
    }

    #[test]
    fn tool_descriptor_defaults() {
        let tool: ToolDescriptor =
            serde_json::from_str(r#"{"id": "timer", "path": "Timer_New/index.html"}"#).unwrap();
        assert_eq!(tool.id, ToolId::new("timer"));
        assert!(tool.window.is_none());
        assert!(!tool.checked);
        assert_eq!(tool.display_title(), "timer");
    }

    #[test]
    fn tool_descriptor_builder() {
        let tool = ToolDescriptor::new("email", "email/index.html").with_window(500, 700);
        assert_eq!(tool.window, Some(Size::new(500, 700)));
        assert_eq!(tool.display_title(), "email");
    }
}
