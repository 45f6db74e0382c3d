// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use prism_math::{
    swizzle, Color3ub, Color4f, Color4ub, SwizzleError, SwizzlePlan, Vec3, Vector3, Vector4,
};
use serde::Deserialize;

// --- A TEXTURE IMPORT SETTINGS FILE, AS A TOOL WOULD READ IT ---
#[derive(Debug, Deserialize)]
struct ChannelMapping {
    /// Reorders a BGRA source into RGB.
    color: SwizzlePlan<4, 3>,
    /// Replicates the alpha channel into an opaque mask.
    mask: SwizzlePlan<4, 4>,
    tint: Color4f,
    offset: Vec3,
}

const MAPPING: &str = r#"(
    color: "bgr",
    mask: "aaa1",
    tint: (1.0, 0.5, 0.25, 1.0),
    offset: (0.0, -1.0, 2.5),
)"#;

#[test]
fn test_plans_loaded_from_ron_configuration() -> anyhow::Result<()> {
    // --- 1. ARRANGE ---
    let mapping: ChannelMapping = ron::from_str(MAPPING)?;
    let pixel = Color4ub::new(0x10, 0x20, 0x30, 0x80);

    // --- 2. ACT ---
    let rgb = mapping.color.apply(&pixel);
    let mask = mapping.mask.apply(&pixel);

    // --- 3. ASSERT ---
    // Three and four selectors applied to a color stay colors.
    assert_eq!(rgb, Color3ub::new(0x30, 0x20, 0x10));
    assert_eq!(mask, Color4ub::new(0x80, 0x80, 0x80, 1));
    assert_eq!(mapping.tint, Color4f::new(1.0, 0.5, 0.25, 1.0));
    assert_eq!(mapping.offset, Vec3::new(0.0, -1.0, 2.5));

    // Plans keep their canonical text form.
    assert_eq!(mapping.color.to_string(), "zyx");
    assert_eq!(mapping.mask.to_string(), "www1");
    Ok(())
}

#[test]
fn test_invalid_plan_in_configuration_is_rejected() {
    // `w` does not exist on a 3-component source.
    #[derive(Debug, Deserialize)]
    struct Narrow {
        #[allow(dead_code)]
        plan: SwizzlePlan<3, 2>,
    }

    let error = ron::from_str::<Narrow>(r#"(plan: "xw")"#)
        .expect_err("a selector past the source size must not load");
    let message = error.to_string();
    assert!(message.contains("'w'"), "unexpected error: {message}");
    assert!(message.contains('3'), "unexpected error: {message}");

    let error = ron::from_str::<Narrow>(r#"(plan: "xyz")"#)
        .expect_err("a pattern of the wrong length must not load");
    assert!(error.to_string().contains("expected 2"));
}

#[test]
fn test_runtime_plan_matches_compile_time_swizzle() -> anyhow::Result<()> {
    let source = Vector4::new(-1, 2, 3, 4);
    let plan: SwizzlePlan<4, 6> = "w10xyz".parse()?;

    let from_plan = plan.apply(&source);
    let from_macro = swizzle!(source, "w10xyz");

    assert_eq!(from_plan, from_macro);
    assert_eq!(from_plan.into_array(), [4, 1, 0, -1, 2, 3]);
    Ok(())
}

#[test]
fn test_plan_errors_are_reported_not_panicked() {
    assert_eq!(SwizzlePlan::<3, 1>::parse(""), Err(SwizzleError::Empty));
    assert_eq!(
        SwizzlePlan::<3, 2>::parse("xq"),
        Err(SwizzleError::InvalidSelector('q'))
    );
    assert!(matches!(
        SwizzlePlan::<2, 1>::parse("z"),
        Err(SwizzleError::OutOfRange { size: 2, .. })
    ));
}

#[test]
fn test_vector_binary_round_trip() -> anyhow::Result<()> {
    let config = bincode::config::standard();
    let original = Vector3::new(7u8, 0, 255);

    let bytes = bincode::serde::encode_to_vec(original, config)?;
    let (decoded, read): (Vector3<u8>, usize) = bincode::serde::decode_from_slice(&bytes, config)?;

    assert_eq!(decoded, original);
    assert_eq!(read, bytes.len());
    Ok(())
}

#[test]
fn test_json_array_form() -> anyhow::Result<()> {
    let color = Color3ub::new(255, 128, 0);
    let json = serde_json::to_string(&color)?;
    assert_eq!(json, "[255,128,0]");

    let plan: SwizzlePlan<3, 4> = serde_json::from_str("\"bgr1\"")?;
    assert_eq!(serde_json::to_string(&plan)?, "\"zyx1\"");

    // Too few components.
    assert!(serde_json::from_str::<Vec3>("[1.0, 2.0]").is_err());
    Ok(())
}
