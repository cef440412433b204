use std::borrow::Cow;

use expert_chat_core::model::{Model, OpenAiModel};

pub const GPT4_O_MINI: &str = "gpt-4o-mini";

pub(crate) fn map_model(model: &Model) -> Cow<'static, str> {
    match model {
        Model::Custom(custom) => Cow::Borrowed(*custom),
        Model::OpenAi(OpenAiModel::Gpt4oMini) => GPT4_O_MINI.into(),
    }
}
