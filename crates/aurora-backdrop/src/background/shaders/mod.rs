mod aurora;

pub use aurora::SHADER_AURORA;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aurora_shader_validates() {
        let module = naga::front::wgsl::parse_str(SHADER_AURORA)
            .unwrap_or_else(|e| panic!("{}", e.emit_to_string(SHADER_AURORA)));
        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::default(),
        );
        validator.validate(&module).unwrap();

        let entry_points: Vec<&str> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
        assert!(entry_points.contains(&"vs_main"));
        assert!(entry_points.contains(&"fs_main"));
    }

    #[test]
    fn test_aurora_shader_matches_cpu_constants() {
        for constant in [
            "vec2<f32>(123.34, 456.21)",
            "q + 45.32",
            "mat2x2<f32>(1.6, 1.2, -1.2, 1.6)",
            "i < 5",
            "vec2<f32>(5.2, 1.3) + 0.02 * t",
            "vec2<f32>(1.7, 9.2) + 0.15 * t",
            "vec2<f32>(8.3, 2.8) + 0.126 * t",
            "vec3<f32>(0.02, 0.05, 0.2), vec3<f32>(0.05, 0.2, 0.5)",
            "vec3<f32>(0.1, 0.7, 0.9), dot(r, q) * 0.8",
            "0.85 + 0.15 * sin(t * 0.2)",
            "smoothstep(0.2, 0.8, d)",
        ] {
            assert!(SHADER_AURORA.contains(constant), "missing `{}`", constant);
        }
    }
}
