//! Chat modes and the reduced event set surfaced to the gateway

/// Assistant mode selected by the chat request
///
/// Each mode maps to one system prompt; unknown or missing values fall back
/// to [`ChatMode::Chat`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatMode {
    #[default]
    Chat,
    Code,
    Debug,
}

impl ChatMode {
    /// Parse the optional wire value, falling back to the default mode
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("code") => ChatMode::Code,
            Some("debug") => ChatMode::Debug,
            _ => ChatMode::Chat,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChatMode::Chat => "chat",
            ChatMode::Code => "code",
            ChatMode::Debug => "debug",
        }
    }

    /// System prompt sent with the upstream completion request
    pub fn system_prompt(&self) -> &'static str {
        match self {
            ChatMode::Code => {
                "You are an expert coding assistant specializing in web development. Focus on:\n\
                 - Writing clean, efficient, and well-documented code\n\
                 - Following modern best practices and design patterns\n\
                 - Providing complete, runnable implementations\n\
                 - Explaining your code choices and architecture decisions\n\
                 - Suggesting optimizations and improvements"
            }
            ChatMode::Debug => {
                "You are a debugging specialist focused on:\n\
                 - Identifying root causes of errors and issues\n\
                 - Providing step-by-step debugging strategies\n\
                 - Explaining why problems occur and how to prevent them\n\
                 - Offering multiple solution approaches\n\
                 - Teaching debugging methodologies"
            }
            ChatMode::Chat => {
                "You are a helpful and knowledgeable development mentor. Focus on:\n\
                 - Providing clear explanations and guidance\n\
                 - Being conversational and supportive\n\
                 - Sharing best practices and industry insights\n\
                 - Helping with architecture and design decisions\n\
                 - Encouraging learning and growth"
            }
        }
    }
}

impl std::fmt::Display for ChatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Event surfaced to the gateway while a completion session is live
#[derive(Clone, Debug, PartialEq)]
pub enum StreamEvent {
    /// Incremental text produced by the model
    TextDelta { content: String },
    /// Upstream signalled end-of-stream
    Completed,
    /// Upstream reported a failure; terminal
    Failed { message: String },
}
