use wasm_bindgen::prelude::*;

use crate::block::ProgramBlocks;
use crate::codegen::{CodeGenerator, GenerationMode};
use crate::schema::ComponentDatabase;

fn generate(
    schema_json: &str,
    form_json: &str,
    program_json: &str,
    mode: GenerationMode,
) -> Result<String, JsValue> {
    let mut db = ComponentDatabase::new();
    db.populate_from_json(schema_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let program: ProgramBlocks =
        serde_json::from_str(program_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    CodeGenerator::new(&db, mode)
        .generate(form_json, &program)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn generate_deployed(
    schema_json: &str,
    form_json: &str,
    program_json: &str,
) -> Result<String, JsValue> {
    generate(schema_json, form_json, program_json, GenerationMode::Deployed)
}

#[wasm_bindgen]
pub fn generate_live_session(
    schema_json: &str,
    form_json: &str,
    program_json: &str,
) -> Result<String, JsValue> {
    generate(
        schema_json,
        form_json,
        program_json,
        GenerationMode::LiveSession,
    )
}
