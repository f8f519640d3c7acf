//! Shared state handed to every route.

use std::sync::Arc;

use crate::application::{
    AbandonFlowHandler, AnswerFlowHandler, CreateProductHandler, CreateQuestionHandler,
    DeleteProductHandler, DeleteQuestionHandler, GetFlowHandler, GetProductHandler,
    GetQuestionHandler, ListProductsHandler, ListQuestionsHandler, NextOrderHandler,
    ProductReportHandler, QuestionReportHandler, RecentProductsHandler, RecommendationFinalizer,
    RestartFlowHandler, StartFlowHandler, UpdateProductHandler, UpdateQuestionHandler,
};
use crate::ports::{
    FlowSessionStore, ImageStorage, ProductRepository, QuestionRepository, RecommendationService,
};

/// Ports the HTTP layer builds its handlers from.
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<dyn QuestionRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub images: Arc<dyn ImageStorage>,
    pub sessions: Arc<dyn FlowSessionStore>,
    finalizer: Arc<RecommendationFinalizer>,
}

impl AppState {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        products: Arc<dyn ProductRepository>,
        images: Arc<dyn ImageStorage>,
        sessions: Arc<dyn FlowSessionStore>,
        recommendations: Arc<dyn RecommendationService>,
    ) -> Self {
        let finalizer = Arc::new(RecommendationFinalizer::new(
            sessions.clone(),
            recommendations,
            products.clone(),
        ));
        Self {
            questions,
            products,
            images,
            sessions,
            finalizer,
        }
    }

    // ─── Questions ───────────────────────────────────────────────────

    pub fn list_questions_handler(&self) -> ListQuestionsHandler {
        ListQuestionsHandler::new(self.questions.clone())
    }

    pub fn get_question_handler(&self) -> GetQuestionHandler {
        GetQuestionHandler::new(self.questions.clone())
    }

    pub fn create_question_handler(&self) -> CreateQuestionHandler {
        CreateQuestionHandler::new(self.questions.clone())
    }

    pub fn update_question_handler(&self) -> UpdateQuestionHandler {
        UpdateQuestionHandler::new(self.questions.clone())
    }

    pub fn delete_question_handler(&self) -> DeleteQuestionHandler {
        DeleteQuestionHandler::new(self.questions.clone())
    }

    pub fn next_order_handler(&self) -> NextOrderHandler {
        NextOrderHandler::new(self.questions.clone())
    }

    pub fn question_report_handler(&self) -> QuestionReportHandler {
        QuestionReportHandler::new(self.questions.clone())
    }

    // ─── Products ────────────────────────────────────────────────────

    pub fn list_products_handler(&self) -> ListProductsHandler {
        ListProductsHandler::new(self.products.clone())
    }

    pub fn recent_products_handler(&self) -> RecentProductsHandler {
        RecentProductsHandler::new(self.products.clone())
    }

    pub fn get_product_handler(&self) -> GetProductHandler {
        GetProductHandler::new(self.products.clone())
    }

    pub fn create_product_handler(&self) -> CreateProductHandler {
        CreateProductHandler::new(self.products.clone(), self.images.clone())
    }

    pub fn update_product_handler(&self) -> UpdateProductHandler {
        UpdateProductHandler::new(self.products.clone(), self.images.clone())
    }

    pub fn delete_product_handler(&self) -> DeleteProductHandler {
        DeleteProductHandler::new(self.products.clone())
    }

    pub fn product_report_handler(&self) -> ProductReportHandler {
        ProductReportHandler::new(self.products.clone())
    }

    // ─── Chat ────────────────────────────────────────────────────────

    pub fn start_flow_handler(&self) -> StartFlowHandler {
        StartFlowHandler::new(self.sessions.clone(), self.questions.clone())
    }

    pub fn answer_flow_handler(&self) -> AnswerFlowHandler {
        AnswerFlowHandler::new(self.sessions.clone(), self.finalizer.clone())
    }

    pub fn get_flow_handler(&self) -> GetFlowHandler {
        GetFlowHandler::new(self.sessions.clone())
    }

    pub fn restart_flow_handler(&self) -> RestartFlowHandler {
        RestartFlowHandler::new(self.sessions.clone())
    }

    pub fn abandon_flow_handler(&self) -> AbandonFlowHandler {
        AbandonFlowHandler::new(self.sessions.clone())
    }
}
