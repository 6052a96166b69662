use iced::event::{self, Event};
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

mod api;
mod config;
mod error;
mod image_file;
mod state;
mod ui;

use api::ApiClient;
use config::Config;
use error::ApiResult;
use state::create::CreateForm;
use state::data::{ImageFile, Project, ProjectDetails, ProjectId, ProjectType, SessionToken};
use state::gallery::Gallery;
use state::login::LoginForm;
use state::session::{self, Route, Session};

/// Interval of the placeholder animation
const TICK: Duration = Duration::from_millis(50);

/// Where a selected image should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTarget {
    Create,
    Edit,
}

/// Main application state
struct PortfolioAdmin {
    api: ApiClient,
    session: Session,
    route: Route,
    /// Routes to return to with `Back`
    history: Vec<Route>,
    login: LoginForm,
    gallery: Gallery,
    create: CreateForm,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    // ========== Navigation ==========
    Navigate(Route),
    Back,
    Logout,

    // ========== Login ==========
    UsernameChanged(String),
    PasswordChanged(String),
    LoginSubmitted,
    LoginFinished(ApiResult<SessionToken>),

    // ========== Gallery ==========
    ProjectsLoaded(ApiResult<Vec<Project>>),
    Tick,
    DeleteRequested(ProjectId),
    DeleteCancelled,
    DeleteConfirmed,
    DeleteFinished(ProjectId, ApiResult<()>),
    EditRequested(ProjectId),
    EditDescriptionChanged(String),
    EditTypeSelected(ProjectType),
    EditBrowse,
    EditCancelled,
    EditSaved,
    EditFinished(ProjectId, Option<ImageFile>, ApiResult<ProjectDetails>),

    // ========== Create ==========
    DescriptionChanged(String),
    TypeSelected(ProjectType),
    Browse,
    CreateSubmitted,
    CreateFinished(ApiResult<Option<Project>>),

    // ========== Files ==========
    FileHovered,
    FileDropped(PathBuf),
    FilesHoveredLeft,
    ImagePicked(ImageTarget, Option<PathBuf>),
    ImageLoaded(ImageTarget, ApiResult<ImageFile>),
}

impl PortfolioAdmin {
    /// Create a new instance of the application
    fn new(api: ApiClient, initial: Route) -> (Self, Task<Message>) {
        let mut app = PortfolioAdmin {
            api,
            session: Session::new(),
            route: Route::Login,
            history: Vec::new(),
            login: LoginForm::new(),
            gallery: Gallery::new(),
            create: CreateForm::new(),
        };

        let task = app.navigate(initial);
        (app, task)
    }

    /// A client carrying the current session
    fn client(&self) -> ApiClient {
        self.api.with_token(self.session.token().cloned())
    }

    /// Show a route, applying the session guard
    ///
    /// Re-selecting the current route is a no-op. Any other change mounts
    /// the new view.
    fn navigate(&mut self, requested: Route) -> Task<Message> {
        let route = session::guard(requested, &self.session);
        if route != requested {
            info!("🔒 {} requires a session, redirecting to {}", requested.path(), route.path());
        }
        if route == self.route {
            return Task::none();
        }

        self.history.push(self.route);
        self.route = route;
        self.enter(route)
    }

    fn go_back(&mut self) -> Task<Message> {
        let previous = self.history.pop().unwrap_or(Route::Gallery);
        let route = session::guard(previous, &self.session);
        if route == self.route {
            return Task::none();
        }

        self.route = route;
        self.enter(route)
    }

    /// Mount a view. The gallery reloads its list on every mount.
    fn enter(&mut self, route: Route) -> Task<Message> {
        match route {
            Route::Gallery => {
                self.gallery.begin_load();
                let client = self.client();
                Task::perform(
                    async move { client.list_projects().await },
                    Message::ProjectsLoaded,
                )
            }
            Route::CreateProject => {
                self.create = CreateForm::new();
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn load_image(target: ImageTarget, path: PathBuf) -> Task<Message> {
        Task::perform(image_file::load(path), move |result| {
            Message::ImageLoaded(target, result)
        })
    }

    fn pick_image(target: ImageTarget) -> Task<Message> {
        Task::perform(image_file::pick(), move |path| {
            Message::ImagePicked(target, path)
        })
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => self.navigate(route),
            Message::Back => self.go_back(),
            Message::Logout => {
                self.session.sign_out();
                self.gallery = Gallery::new();
                self.login = LoginForm::new();
                let task = self.navigate(Route::Login);
                self.history.clear();
                task
            }

            Message::UsernameChanged(username) => {
                self.login.username = username;
                Task::none()
            }
            Message::PasswordChanged(password) => {
                self.login.password = password;
                Task::none()
            }
            Message::LoginSubmitted => {
                let Some(credentials) = self.login.submit() else {
                    return Task::none();
                };
                let client = self.client();
                Task::perform(
                    async move { client.login(&credentials).await },
                    Message::LoginFinished,
                )
            }
            Message::LoginFinished(result) => match self.login.finish(result) {
                Some(token) => {
                    self.session.sign_in(token);
                    self.gallery = Gallery::new();
                    self.navigate(Route::Gallery)
                }
                None => Task::none(),
            },

            Message::ProjectsLoaded(result) => {
                self.gallery.finish_load(result);
                Task::none()
            }
            Message::Tick => {
                self.gallery.tick(TICK);
                Task::none()
            }
            Message::DeleteRequested(id) => {
                self.gallery.request_delete(id);
                Task::none()
            }
            Message::DeleteCancelled => {
                self.gallery.cancel_delete();
                Task::none()
            }
            Message::DeleteConfirmed => {
                let Some(id) = self.gallery.confirm_delete() else {
                    return Task::none();
                };
                let client = self.client();
                Task::perform(
                    async move {
                        let result = client.delete_project(&id).await;
                        (id, result)
                    },
                    |(id, result)| Message::DeleteFinished(id, result),
                )
            }
            Message::DeleteFinished(id, result) => {
                self.gallery.finish_delete(&id, result);
                Task::none()
            }
            Message::EditRequested(id) => {
                self.gallery.begin_edit(&id);
                Task::none()
            }
            Message::EditDescriptionChanged(description) => {
                self.gallery.edit_description(description);
                Task::none()
            }
            Message::EditTypeSelected(project_type) => {
                self.gallery.edit_type(project_type);
                Task::none()
            }
            Message::EditBrowse => Self::pick_image(ImageTarget::Edit),
            Message::EditCancelled => {
                self.gallery.cancel_edit();
                Task::none()
            }
            Message::EditSaved => {
                let Some((id, update)) = self.gallery.save_edit() else {
                    return Task::none();
                };
                let replaced = update.image.clone();
                let client = self.client();
                Task::perform(
                    async move {
                        let result = client.update_project(&id, update).await;
                        (id, replaced, result)
                    },
                    |(id, replaced, result)| Message::EditFinished(id, replaced, result),
                )
            }
            Message::EditFinished(id, replaced, result) => {
                self.gallery.finish_edit(&id, replaced, result);
                Task::none()
            }

            Message::DescriptionChanged(description) => {
                self.create.description = description;
                Task::none()
            }
            Message::TypeSelected(project_type) => {
                self.create.project_type = Some(project_type);
                Task::none()
            }
            Message::Browse => Self::pick_image(ImageTarget::Create),
            Message::CreateSubmitted => {
                let Some(project) = self.create.submit() else {
                    return Task::none();
                };
                let client = self.client();
                Task::perform(
                    async move { client.create_project(project).await },
                    Message::CreateFinished,
                )
            }
            Message::CreateFinished(result) => {
                match result {
                    Ok(created) => {
                        self.create.finish(Ok(()));
                        if let Some(project) = created {
                            self.gallery.project_created(project);
                        }
                    }
                    Err(e) => self.create.finish(Err(e)),
                }
                Task::none()
            }

            Message::FileHovered => {
                self.create.drop_zone.hover();
                Task::none()
            }
            Message::FilesHoveredLeft => {
                self.create.drop_zone.leave();
                Task::none()
            }
            Message::FileDropped(path) => match self.create.drop_zone.drop_file(path) {
                Some(path) => Self::load_image(ImageTarget::Create, path),
                None => Task::none(),
            },
            Message::ImagePicked(target, Some(path)) => Self::load_image(target, path),
            Message::ImagePicked(_, None) => Task::none(),
            Message::ImageLoaded(target, result) => {
                match (target, result) {
                    (ImageTarget::Create, Ok(image)) => self.create.select_image(image),
                    (ImageTarget::Create, Err(e)) => self.create.reject_file(&e),
                    (ImageTarget::Edit, Ok(image)) => self.gallery.edit_image(image),
                    (ImageTarget::Edit, Err(e)) => self.gallery.reject_edit_image(&e),
                }
                if target == ImageTarget::Create {
                    self.create.drop_zone.settle();
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match self.route {
            Route::Login => ui::login::view(&self.login),
            Route::Gallery => ui::nav::view(ui::gallery::view(&self.gallery)),
            Route::CreateProject => ui::create::view(&self.create),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let files = match self.route {
            Route::CreateProject => event::listen_with(|event, _status, _window| match event {
                Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
                Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
                Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
                _ => None,
            }),
            _ => Subscription::none(),
        };

        let placeholder = if self.route == Route::Gallery && self.gallery.shows_placeholder() {
            iced::time::every(TICK).map(|_| Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([files, placeholder])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_admin=info")),
        )
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Unusable configuration: {}", e);
            std::process::exit(1);
        }
    };

    let api = match ApiClient::new(&config) {
        Ok(api) => api,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let initial = std::env::args()
        .nth(1)
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Login);

    info!("🚀 Portfolio admin starting at {}", initial.path());

    iced::application("Portfolio Admin", PortfolioAdmin::update, PortfolioAdmin::view)
        .theme(PortfolioAdmin::theme)
        .subscription(PortfolioAdmin::subscription)
        .centered()
        .run_with(move || PortfolioAdmin::new(api, initial))
}
