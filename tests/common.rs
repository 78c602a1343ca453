// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Scripted LLM and search providers plus ServerResources builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use sous_chef::config::environment::{
    LlmConfig, RecipeDatabaseConfig, SearchConfig, ServerConfig,
};
use sous_chef::errors::AppError;
use sous_chef::llm::{ChatRequest, ChatResponse, ImageData, LlmProvider};
use sous_chef::recipes::{Recipe, RecipeDatabase};
use sous_chef::resources::ServerResources;
use sous_chef::search::SearchProvider;

/// Configuration with no credentials and a throwaway database path
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        cors_origins: vec!["*".to_owned()],
        llm: LlmConfig {
            gemini_api_key: None,
            gemini_model: None,
        },
        search: SearchConfig {
            google_cse_api_key: None,
            google_cse_id: None,
            max_results: 5,
        },
        recipes: RecipeDatabaseConfig {
            path: PathBuf::from("data/recipes.json"),
        },
    }
}

/// Two small curated recipes: one vegetarian pasta, one chicken dish
pub fn sample_recipes() -> Vec<Recipe> {
    serde_json::from_value(json!([
        {
            "title": "Tomato Pasta",
            "description": "Quick pasta with tomatoes.",
            "cuisine": "italian",
            "ingredients": [
                {"name": "pasta", "quantity": "200g"},
                {"name": "tomatoes", "quantity": "3"}
            ],
            "steps": ["Boil pasta.", "Add tomatoes."],
            "cooking_time": 20,
            "difficulty": "Easy",
            "nutrition": {"calories": 500, "protein": 15},
            "servings": 2
        },
        {
            "title": "Chicken Rice Bowl",
            "description": "Chicken over rice.",
            "cuisine": "japanese",
            "ingredients": [
                {"name": "chicken breast", "quantity": "300g"},
                {"name": "rice", "quantity": "2 cups"}
            ],
            "steps": ["Cook rice.", "Sear chicken.", "Combine."],
            "cooking_time": 30,
            "difficulty": "Medium",
            "nutrition": {"calories": 600, "protein": 40},
            "servings": 2
        }
    ]))
    .expect("sample recipes are valid")
}

/// Build shared resources from parts, bypassing env and file loading
pub fn test_resources(
    recipes: Vec<Recipe>,
    llm: Option<Box<dyn LlmProvider>>,
    search_providers: Vec<Box<dyn SearchProvider>>,
) -> Arc<ServerResources> {
    Arc::new(ServerResources {
        config: test_config(),
        database: RecipeDatabase::from_recipes(recipes),
        llm,
        search_providers,
    })
}

// ============================================================================
// Scripted Providers
// ============================================================================

/// LLM that replies with a fixed string to every request
pub struct ScriptedLlm {
    reply: String,
}

impl ScriptedLlm {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }

    pub fn boxed(reply: impl Into<String>) -> Box<dyn LlmProvider> {
        Box::new(Self::new(reply))
    }

    fn respond(&self) -> ChatResponse {
        ChatResponse {
            content: self.reply.clone(),
            model: "scripted-1".to_owned(),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        }
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlm {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Test LLM"
    }

    fn default_model(&self) -> &str {
        "scripted-1"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Ok(self.respond())
    }

    async fn complete_vision(
        &self,
        _prompt: &str,
        _image: &ImageData,
    ) -> Result<ChatResponse, AppError> {
        Ok(self.respond())
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// LLM that fails every request, simulating an upstream outage
pub struct FailingLlm;

impl FailingLlm {
    pub fn boxed() -> Box<dyn LlmProvider> {
        Box::new(Self)
    }
}

#[async_trait]
impl LlmProvider for FailingLlm {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn display_name(&self) -> &'static str {
        "Failing Test LLM"
    }

    fn default_model(&self) -> &str {
        "failing-1"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Err(AppError::external_service("simulated outage"))
    }

    async fn complete_vision(
        &self,
        _prompt: &str,
        _image: &ImageData,
    ) -> Result<ChatResponse, AppError> {
        Err(AppError::external_service("simulated outage"))
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(false)
    }
}

/// Search provider returning a fixed snippet list
pub struct FixedSearch {
    snippets: Vec<String>,
}

impl FixedSearch {
    pub fn boxed(snippets: &[&str]) -> Box<dyn SearchProvider> {
        Box::new(Self {
            snippets: snippets.iter().map(|s| (*s).to_owned()).collect(),
        })
    }
}

#[async_trait]
impl SearchProvider for FixedSearch {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn search(&self, _query: &str, max_results: usize) -> Result<Vec<String>, AppError> {
        let mut snippets = self.snippets.clone();
        snippets.truncate(max_results);
        Ok(snippets)
    }
}
