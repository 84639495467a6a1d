//! CLI command implementations

use anyhow::Result;
use chrono::{DateTime, Utc};
use dialoguer::{Confirm, Password};
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;

use crate::api::auth::{LoginCredentials, RegisterData, UpdatePasswordData, UpdateProfileData};
use crate::api::courses::{CourseFilters, CourseReviewData, CreateCourseData, UpdateCourseData};
use crate::api::learning::{QuizAnswers, UpdateProgressData};
use crate::api::learning_paths::{CreateLearningPathData, UpdateLearningPathData};
use crate::api::mentoring::{BookSessionData, CreateAvailabilityData};
use crate::api::models::UserRole;
use crate::api::products::{CreateProductData, FeatureData, UpdateProductData};
use crate::api::Api;
use crate::cli::{
    info, print_access_link_table, print_availability_table, print_certificate_table,
    print_course_detail, print_course_table, print_inquiry_table, print_lesson_tree,
    print_path_table, print_product_table, print_progress_table, print_session_table,
    print_user_detail, render_error, success, warn, with_spinner, CertsAction, ContactAction,
    CoursesAction, LearnAction, LinksAction, MentoringAction, OutputFormat, PathsAction, PayAction,
    ProductsAction, ProfileAction,
};
use crate::client::{ApiClient, FileTokenStore, TokenStore};
use crate::config;
use crate::error::Error;
use crate::session::SessionManager;

/// Wiring shared by every command
struct Context {
    api: Api,
    session: SessionManager,
}

fn build_context() -> Result<Context> {
    let config = config::load_or_default()?;
    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(config.auth.token_file.clone()));
    let client = Arc::new(ApiClient::new(&config.api, tokens)?);

    Ok(Context {
        api: Api::new(client.clone()),
        session: SessionManager::new(client),
    })
}

/// Context with session state reconciled, for commands that need identity
async fn hydrated_context() -> Result<Context> {
    let ctx = build_context()?;
    ctx.session.hydrate().await;
    Ok(ctx)
}

fn prompt_password(prompt: &str) -> Result<String> {
    Ok(Password::new().with_prompt(prompt).interact()?)
}

fn confirmed(message: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }
    Ok(Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()?)
}

fn parse_rfc3339(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|e| Error::Other(format!("Invalid timestamp '{}': {}", value, e)))?
        .with_timezone(&Utc))
}

/// Initialize a new robolearn.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new("robolearn.toml");

    if config_path.exists() {
        warn("robolearn.toml already exists");
        return Ok(());
    }

    fs::write(config_path, config::loader::default_config_content())?;

    success("Created robolearn.toml");
    info("Point [api] at your backend, then run 'robolearn login --email <email>'");

    Ok(())
}

/// Log in and persist the session token
pub async fn login(email: &str, password: Option<String>) -> Result<()> {
    let ctx = build_context()?;
    let password = match password {
        Some(password) => password,
        None => prompt_password("Password")?,
    };

    let credentials = LoginCredentials {
        email: email.to_string(),
        password,
    };

    match with_spinner("Logging in...", ctx.session.login(&credentials)).await {
        Ok(response) => {
            success(&format!("Logged in as {}", response.user.email));
            Ok(())
        }
        Err(e) => {
            render_error(&e);
            Err(e.into())
        }
    }
}

/// Create an account and log in
pub async fn register(email: &str, name: &str, password: Option<String>) -> Result<()> {
    let ctx = build_context()?;
    let password = match password {
        Some(password) => password,
        None => prompt_password("Choose a password")?,
    };

    let data = RegisterData {
        email: email.to_string(),
        password,
        name: name.to_string(),
    };

    match with_spinner("Creating account...", ctx.session.register(&data)).await {
        Ok(response) => {
            success(&format!("Welcome, {}!", response.user.profile_data.name));
            Ok(())
        }
        Err(e) => {
            render_error(&e);
            Err(e.into())
        }
    }
}

/// Log out; effective locally even if the server call fails
pub async fn logout() -> Result<()> {
    let ctx = build_context()?;
    ctx.session.logout().await;
    success("Logged out");
    Ok(())
}

/// Show the current identity
pub async fn whoami(refresh: bool) -> Result<()> {
    let ctx = hydrated_context().await?;

    if refresh {
        match with_spinner("Refreshing profile...", ctx.session.refresh()).await {
            Ok(user) => {
                print_user_detail(&user);
                return Ok(());
            }
            Err(e) => {
                render_error(&e);
                return Err(e.into());
            }
        }
    }

    match ctx.session.current_user().await {
        Some(user) => {
            print_user_detail(&user);
            Ok(())
        }
        None => {
            warn("Not logged in");
            Ok(())
        }
    }
}

/// Profile and account management
pub async fn profile(action: ProfileAction) -> Result<()> {
    let ctx = hydrated_context().await?;

    match action {
        ProfileAction::Show => match ctx.session.current_user().await {
            Some(user) => print_user_detail(&user),
            None => return Err(Error::NotAuthenticated.into()),
        },
        ProfileAction::Update {
            name,
            avatar,
            bio,
            phone,
        } => {
            let data = UpdateProfileData {
                name,
                avatar,
                bio,
                phone,
            };
            match ctx.api.auth().update_profile(&data).await {
                Ok(user) => success(&format!("Profile updated for {}", user.email)),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        ProfileAction::Password => {
            let data = UpdatePasswordData {
                current_password: prompt_password("Current password")?,
                new_password: prompt_password("New password")?,
            };
            match ctx.api.auth().update_password(&data).await {
                Ok(_) => success("Password changed"),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        ProfileAction::Delete { force } => {
            if !confirmed(
                "Permanently delete your account? This cannot be undone.",
                force,
            )? {
                info("Cancelled");
                return Ok(());
            }
            match ctx.api.auth().delete_account().await {
                Ok(deleted) => success(&format!("Deleted account {}", deleted.deleted_email)),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

/// Course catalog commands
pub async fn courses(action: CoursesAction) -> Result<()> {
    match action {
        CoursesAction::List {
            category,
            level,
            search,
            min_price,
            max_price,
            instructor,
            page,
            limit,
            format,
        } => {
            let ctx = build_context()?;
            let filters = CourseFilters {
                category,
                level,
                min_price,
                max_price,
                search,
                instructor_id: instructor,
                page,
                limit,
            };
            match with_spinner("Loading catalog...", ctx.api.courses().list(&filters)).await {
                Ok(list) => match format {
                    OutputFormat::Table => print_course_table(&list.courses),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&list)?),
                    OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&list)?),
                },
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        CoursesAction::Show { id } => {
            let ctx = build_context()?;
            match ctx.api.courses().get(&id).await {
                Ok(course) => print_course_detail(&course),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        CoursesAction::Lessons { id } => {
            let ctx = build_context()?;
            match ctx.api.courses().lessons(&id).await {
                Ok(sections) => print_lesson_tree(&sections),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        CoursesAction::Create {
            title,
            description,
            price,
            category,
            level,
            language,
            thumbnail,
        } => {
            let ctx = hydrated_context().await?;
            ctx.session
                .require_any(&[UserRole::Instructor, UserRole::Admin])
                .await?;

            let data = CreateCourseData {
                title,
                description,
                price,
                category,
                level,
                thumbnail,
                language,
                what_you_will_learn: None,
                preview_video_url: None,
            };
            match ctx.api.courses().create(&data).await {
                Ok(course) => success(&format!("Created course {} ({})", course.title, course.id)),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        CoursesAction::Update {
            id,
            title,
            description,
            price,
            status,
        } => {
            let ctx = hydrated_context().await?;
            ctx.session
                .require_any(&[UserRole::Instructor, UserRole::Admin])
                .await?;

            let data = UpdateCourseData {
                title,
                description,
                price,
                status,
                ..Default::default()
            };
            match ctx.api.courses().update(&id, &data).await {
                Ok(course) => success(&format!("Updated course {}", course.id)),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        CoursesAction::Delete { id, force } => {
            let ctx = hydrated_context().await?;
            ctx.session
                .require_any(&[UserRole::Instructor, UserRole::Admin])
                .await?;

            if !confirmed(&format!("Delete course '{}'?", id), force)? {
                info("Cancelled");
                return Ok(());
            }
            match ctx.api.courses().delete(&id).await {
                Ok(_) => success(&format!("Deleted course {}", id)),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        CoursesAction::Enroll { id } => {
            let ctx = build_context()?;
            match with_spinner("Enrolling...", ctx.api.courses().enroll(&id)).await {
                Ok(result) => success(
                    result
                        .message
                        .as_deref()
                        .unwrap_or("Enrolled! Start learning with 'robolearn learn progress'"),
                ),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        CoursesAction::Reviews { id } => {
            let ctx = build_context()?;
            match ctx.api.courses().reviews(&id).await {
                Ok(reviews) => {
                    if reviews.is_empty() {
                        info("No reviews yet");
                    }
                    for review in reviews {
                        let stars = "★".repeat(review.rating as usize);
                        println!("{} {}", stars, review.review_text.as_deref().unwrap_or(""));
                    }
                }
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        CoursesAction::Review { id, rating, text } => {
            let ctx = build_context()?;
            let data = CourseReviewData {
                rating,
                review_text: text,
            };
            match ctx.api.courses().add_review(&id, &data).await {
                Ok(_) => success("Review saved"),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        CoursesAction::Enrolled { format } => {
            let ctx = build_context()?;
            match ctx.api.courses().enrolled().await {
                Ok(courses) => match format {
                    OutputFormat::Table => print_course_table(&courses),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&courses)?),
                    OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&courses)?),
                },
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        CoursesAction::Links { id } => {
            let ctx = hydrated_context().await?;
            ctx.session
                .require_any(&[UserRole::Instructor, UserRole::Admin])
                .await?;

            match ctx.api.courses().access_links(&id).await {
                Ok(links) => print_access_link_table(&links),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        CoursesAction::Link {
            id,
            max_uses,
            expires_at,
        } => {
            let ctx = hydrated_context().await?;
            ctx.session
                .require_any(&[UserRole::Instructor, UserRole::Admin])
                .await?;

            let expires_at = expires_at.as_deref().map(parse_rfc3339).transpose()?;
            match ctx
                .api
                .courses()
                .generate_access_link(&id, max_uses, expires_at)
                .await
            {
                Ok(link) => {
                    success("Invite link created");
                    println!("{}", link.url);
                }
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

/// Learning progress and quiz commands
pub async fn learn(action: LearnAction) -> Result<()> {
    let ctx = build_context()?;

    match action {
        LearnAction::Progress { format } => {
            match with_spinner("Loading progress...", ctx.api.learning().progress()).await {
                Ok(progress) => match format {
                    OutputFormat::Table => print_progress_table(&progress),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&progress)?),
                    OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&progress)?),
                },
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        LearnAction::Show { course_id } => {
            match ctx.api.learning().course_with_progress(&course_id).await {
                Ok(enrolled) => {
                    print_course_detail(&enrolled.course);
                    if let Some(progress) = enrolled.progress {
                        println!();
                        info(&format!("Progress: {:.0}%", progress));
                    }
                    if let Some(sections) = &enrolled.sections {
                        println!();
                        print_lesson_tree(sections);
                    }
                }
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        LearnAction::Complete {
            lesson_id,
            status,
            time_spent,
        } => {
            let data = UpdateProgressData {
                lesson_id,
                completion_status: status,
                time_spent,
            };
            match ctx.api.learning().update_progress(&data).await {
                Ok(_) => success("Progress saved"),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        LearnAction::Quiz { quiz_id, answers } => {
            let answers = parse_quiz_answers(&answers)?;
            match ctx.api.learning().submit_quiz(&quiz_id, &answers).await {
                Ok(attempt) => {
                    if attempt.passed {
                        success(&format!(
                            "Passed with {:.0}% ({}/{} correct)",
                            attempt.score, attempt.correct_answers, attempt.total_questions
                        ));
                    } else {
                        warn(&format!(
                            "Not passed: {:.0}%, needed {}%",
                            attempt.score, attempt.passing_score
                        ));
                    }
                }
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

fn parse_quiz_answers(pairs: &[String]) -> Result<QuizAnswers> {
    let mut answers = HashMap::new();
    for pair in pairs {
        let (index, choice) = pair
            .split_once('=')
            .ok_or_else(|| Error::Other(format!("Invalid answer '{}', expected INDEX=CHOICE", pair)))?;
        let choice: u32 = choice
            .parse()
            .map_err(|_| Error::Other(format!("Invalid choice in '{}'", pair)))?;
        answers.insert(index.to_string(), choice);
    }
    Ok(QuizAnswers { answers })
}

/// Learning path commands
pub async fn paths(action: PathsAction) -> Result<()> {
    match action {
        PathsAction::List { format } => {
            let ctx = build_context()?;
            match ctx.api.learning_paths().list().await {
                Ok(paths) => match format {
                    OutputFormat::Table => print_path_table(&paths),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&paths)?),
                    OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&paths)?),
                },
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        PathsAction::Show { id } => {
            let ctx = build_context()?;
            match ctx.api.learning_paths().get(&id).await {
                Ok(path) => {
                    println!("{}", path.title);
                    println!("{}", path.description);
                    println!();
                    for course in &path.courses {
                        println!("  {}. {}", course.order_in_path, course.course.title);
                    }
                }
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        PathsAction::Create {
            title,
            description,
            difficulty,
        } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            let data = CreateLearningPathData {
                title,
                description,
                thumbnail: None,
                difficulty,
                order_index: None,
                course_ids: None,
            };
            match ctx.api.learning_paths().create(&data).await {
                Ok(path) => success(&format!("Created path {} ({})", path.title, path.id)),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        PathsAction::Publish { id, published } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            let data = UpdateLearningPathData {
                is_published: Some(published),
                ..Default::default()
            };
            match ctx.api.learning_paths().update(&id, &data).await {
                Ok(path) => success(&format!(
                    "Path {} is now {}",
                    path.id,
                    if path.is_published { "published" } else { "unpublished" }
                )),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        PathsAction::Delete { id, force } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            if !confirmed(&format!("Delete learning path '{}'?", id), force)? {
                info("Cancelled");
                return Ok(());
            }
            match ctx.api.learning_paths().delete(&id).await {
                Ok(_) => success(&format!("Deleted path {}", id)),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        PathsAction::AddCourse {
            id,
            course_id,
            order,
        } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            match ctx
                .api
                .learning_paths()
                .add_course(&id, &course_id, order)
                .await
            {
                Ok(_) => success("Course added to path"),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        PathsAction::RemoveCourse { id, course_id } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            match ctx.api.learning_paths().remove_course(&id, &course_id).await {
                Ok(_) => success("Course removed from path"),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

/// Marketing product commands
pub async fn products(action: ProductsAction) -> Result<()> {
    match action {
        ProductsAction::List { all, format } => {
            let ctx = build_context()?;
            match ctx.api.products().list(all).await {
                Ok(products) => match format {
                    OutputFormat::Table => print_product_table(&products),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&products)?),
                    OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&products)?),
                },
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        ProductsAction::Show { id } => {
            let ctx = build_context()?;
            match ctx.api.products().get(&id).await {
                Ok(product) => {
                    println!("{}", product.title);
                    println!("{}", product.description);
                    for feature in &product.features {
                        println!("  - {}: {}", feature.subtitle, feature.sub_description);
                    }
                }
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        ProductsAction::Create {
            title,
            description,
            image_url,
        } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            let data = CreateProductData {
                title,
                description,
                image_url,
                order_index: None,
                features: None,
            };
            match ctx.api.products().create(&data).await {
                Ok(product) => success(&format!("Created product {} ({})", product.title, product.id)),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        ProductsAction::Publish { id, published } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            let data = UpdateProductData {
                is_published: Some(published),
                ..Default::default()
            };
            match ctx.api.products().update(&id, &data).await {
                Ok(product) => success(&format!(
                    "Product {} is now {}",
                    product.id,
                    if product.is_published { "published" } else { "unpublished" }
                )),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        ProductsAction::Delete { id, force } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            if !confirmed(&format!("Delete product '{}'?", id), force)? {
                info("Cancelled");
                return Ok(());
            }
            match ctx.api.products().delete(&id).await {
                Ok(_) => success(&format!("Deleted product {}", id)),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        ProductsAction::AddFeature {
            id,
            subtitle,
            description,
            order,
        } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            let data = FeatureData {
                subtitle,
                sub_description: description,
                order_index: order,
            };
            match ctx.api.products().add_feature(&id, &data).await {
                Ok(_) => success("Feature added"),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        ProductsAction::DeleteFeature { feature_id } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            match ctx.api.products().delete_feature(&feature_id).await {
                Ok(_) => success("Feature deleted"),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

/// Certificate commands
pub async fn certs(action: CertsAction) -> Result<()> {
    let ctx = build_context()?;

    match action {
        CertsAction::List { format } => match ctx.api.certificates().list().await {
            Ok(certificates) => match format {
                OutputFormat::Table => print_certificate_table(&certificates),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&certificates)?),
                OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&certificates)?),
            },
            Err(e) => {
                render_error(&e);
                return Err(e.into());
            }
        },
        CertsAction::Issue { course_id } => {
            match with_spinner("Issuing certificate...", ctx.api.certificates().issue(&course_id))
                .await
            {
                Ok(cert) => success(&format!(
                    "Certificate {} issued for {}",
                    cert.certificate_code, cert.metadata.course_name
                )),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        CertsAction::Show { id } => match ctx.api.certificates().get(&id).await {
            Ok(cert) => print_certificate(&cert),
            Err(e) => {
                render_error(&e);
                return Err(e.into());
            }
        },
        CertsAction::ByCourse { course_id } => {
            match ctx.api.certificates().by_course(&course_id).await {
                Ok(cert) => print_certificate(&cert),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        CertsAction::Verify { code } => match ctx.api.certificates().verify(&code).await {
            Ok(result) => {
                if result.valid {
                    let detail = result
                        .certificate
                        .map(|c| format!("{} — {}", c.student_name, c.course_name))
                        .unwrap_or_default();
                    success(&format!("Certificate is valid: {}", detail));
                } else {
                    warn(result.message.as_deref().unwrap_or("Certificate is not valid"));
                }
            }
            Err(e) => {
                render_error(&e);
                return Err(e.into());
            }
        },
        CertsAction::Url { id, preview } => {
            let url = if preview {
                ctx.api.certificates().preview_url(&id)?
            } else {
                ctx.api.certificates().download_url(&id)?
            };
            println!("{}", url);
        }
    }

    Ok(())
}

fn print_certificate(cert: &crate::api::models::Certificate) {
    println!("{}", cert.metadata.course_name);
    println!("  Student:    {}", cert.metadata.student_name);
    println!("  Instructor: {}", cert.metadata.instructor_name);
    println!("  Code:       {}", cert.certificate_code);
    println!("  Issued:     {}", cert.issued_at.format("%Y-%m-%d"));
}

/// Mentoring commands
pub async fn mentoring(action: MentoringAction) -> Result<()> {
    match action {
        MentoringAction::Instructors => {
            let ctx = build_context()?;
            match ctx.api.mentoring().instructors().await {
                Ok(instructors) => {
                    if instructors.is_empty() {
                        info("No instructors offering mentoring right now");
                    }
                    for instructor in instructors {
                        let name = instructor
                            .user
                            .as_ref()
                            .map(|u| u.profile_data.name.clone())
                            .unwrap_or_else(|| instructor.id.clone());
                        println!("{} ({})", name, instructor.id);
                        println!("  {}", instructor.expertise.join(", "));
                    }
                }
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        MentoringAction::Availability { instructor } => {
            let ctx = build_context()?;
            let result = match &instructor {
                Some(id) => ctx.api.mentoring().availability_for(id).await,
                None => ctx.api.mentoring().my_availability().await,
            };
            match result {
                Ok(windows) => print_availability_table(&windows),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        MentoringAction::SetAvailability { day, start, end } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Instructor).await?;

            let data = CreateAvailabilityData {
                day_of_week: day,
                start_time: start,
                end_time: end,
            };
            match ctx.api.mentoring().set_availability(&data).await {
                Ok(window) => success(&format!(
                    "Available {:?} {}-{}",
                    window.day_of_week, window.start_time, window.end_time
                )),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        MentoringAction::DropAvailability { id } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Instructor).await?;

            match ctx.api.mentoring().delete_availability(&id).await {
                Ok(_) => success("Availability removed"),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        MentoringAction::Sessions => {
            let ctx = build_context()?;
            match ctx.api.mentoring().sessions().await {
                Ok(sessions) => print_session_table(&sessions),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        MentoringAction::Book {
            instructor,
            at,
            duration,
            topic,
        } => {
            let ctx = build_context()?;
            let data = BookSessionData {
                instructor_id: instructor,
                scheduled_at: parse_rfc3339(&at)?,
                duration,
                topic,
            };
            match with_spinner("Booking session...", ctx.api.mentoring().book(&data)).await {
                Ok(session) => success(&format!(
                    "Booked '{}' at {}",
                    session.topic,
                    session.scheduled_at.format("%Y-%m-%d %H:%M")
                )),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        MentoringAction::Cancel { id } => {
            let ctx = build_context()?;
            match ctx.api.mentoring().cancel(&id).await {
                Ok(_) => success("Session cancelled"),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

/// Contact inquiry commands
pub async fn contact(action: ContactAction) -> Result<()> {
    match action {
        ContactAction::Submit {
            name,
            email,
            subject,
            message,
        } => {
            let ctx = build_context()?;
            let data = crate::api::contact::SubmitContactData {
                name,
                email,
                subject,
                message,
            };
            match ctx.api.contact().submit(&data).await {
                Ok(submitted) => success(&format!(
                    "Inquiry received ({})",
                    submitted.inquiry.id
                )),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        ContactAction::List { status, format } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            match ctx.api.contact().list(status).await {
                Ok(inquiries) => match format {
                    OutputFormat::Table => print_inquiry_table(&inquiries),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&inquiries)?),
                    OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&inquiries)?),
                },
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        ContactAction::Stats => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            match ctx.api.contact().stats().await {
                Ok(stats) => {
                    println!("Total inquiries: {}", stats.total);
                    println!("  new:         {}", stats.by_status.new);
                    println!("  in progress: {}", stats.by_status.in_progress);
                    println!("  resolved:    {}", stats.by_status.resolved);
                }
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        ContactAction::Show { id } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            match ctx.api.contact().get(&id).await {
                Ok(inquiry) => {
                    println!("{} <{}>", inquiry.name, inquiry.email);
                    println!("Subject: {}", inquiry.subject);
                    println!("Status:  {}", inquiry.status);
                    println!();
                    println!("{}", inquiry.message);
                }
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        ContactAction::SetStatus { id, status } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            match ctx.api.contact().update_status(&id, status).await {
                Ok(inquiry) => success(&format!("Inquiry {} is now {}", inquiry.id, inquiry.status)),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        ContactAction::Delete { id, force } => {
            let ctx = hydrated_context().await?;
            ctx.session.require_role(UserRole::Admin).await?;

            if !confirmed(&format!("Delete inquiry '{}'?", id), force)? {
                info("Cancelled");
                return Ok(());
            }
            match ctx.api.contact().delete(&id).await {
                Ok(_) => success(&format!("Deleted inquiry {}", id)),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

/// Invite link commands
pub async fn links(action: LinksAction) -> Result<()> {
    match action {
        LinksAction::Info { token } => {
            let ctx = build_context()?;
            match ctx.api.access_links().info(&token).await {
                Ok(link) => {
                    if link.is_valid {
                        success(&format!("Grants enrollment in: {}", link.course.title));
                        info(&format!(
                            "Taught by {} — {} of {} uses taken",
                            link.course.instructor.name, link.used_count, link.max_uses
                        ));
                    } else {
                        warn("This link is no longer valid");
                    }
                }
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        LinksAction::Redeem { token } => {
            let ctx = build_context()?;
            match with_spinner("Redeeming link...", ctx.api.access_links().redeem(&token)).await {
                Ok(result) => success(&result.message),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        LinksAction::Revoke { id } => {
            let ctx = hydrated_context().await?;
            ctx.session
                .require_any(&[UserRole::Instructor, UserRole::Admin])
                .await?;

            match ctx.api.access_links().revoke(&id).await {
                Ok(_) => success(&format!("Revoked link {}", id)),
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

/// Payment commands
pub async fn pay(action: PayAction) -> Result<()> {
    let ctx = build_context()?;

    match action {
        PayAction::Checkout { course_id } => {
            match with_spinner("Opening checkout...", ctx.api.payments().checkout(&course_id)).await
            {
                Ok(checkout) => {
                    success(&format!("Order {} created", checkout.order_id));
                    info("Approve the payment at the URL below, then run 'robolearn pay capture'");
                    println!("{}", checkout.approval_url);
                }
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        PayAction::Capture { order_id } => {
            match with_spinner("Capturing payment...", ctx.api.payments().capture(&order_id)).await
            {
                Ok(capture) => {
                    success(&capture.message);
                    info(&format!(
                        "Enrolled in course {} on {}",
                        capture.enrollment.course_id,
                        capture.enrollment.enrolled_at.format("%Y-%m-%d")
                    ));
                }
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
        PayAction::Verify { payment_id } => match ctx.api.payments().verify(&payment_id).await {
            Ok(payment) => {
                println!(
                    "{} {} {} ({})",
                    payment.id, payment.amount, payment.currency, payment.status
                );
            }
            Err(e) => {
                render_error(&e);
                return Err(e.into());
            }
        },
        PayAction::Subscriptions => match ctx.api.payments().subscriptions().await {
            Ok(subscriptions) => {
                if subscriptions.is_empty() {
                    info("No subscriptions");
                } else {
                    println!("{}", serde_json::to_string_pretty(&subscriptions)?);
                }
            }
            Err(e) => {
                render_error(&e);
                return Err(e.into());
            }
        },
        PayAction::Subscribe { plan } => {
            match ctx.api.payments().create_subscription(plan).await {
                Ok(checkout) => {
                    success(&format!("Subscription order {} created", checkout.order_id));
                    println!("{}", checkout.url);
                }
                Err(e) => {
                    render_error(&e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quiz_answers() {
        let answers =
            parse_quiz_answers(&["0=2".to_string(), "1=0".to_string()]).expect("must parse");
        assert_eq!(answers.answers.get("0"), Some(&2));
        assert_eq!(answers.answers.get("1"), Some(&0));
    }

    #[test]
    fn test_parse_quiz_answers_rejects_garbage() {
        assert!(parse_quiz_answers(&["nonsense".to_string()]).is_err());
        assert!(parse_quiz_answers(&["0=abc".to_string()]).is_err());
    }

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_rfc3339("2026-01-15T10:00:00Z").expect("must parse");
        assert_eq!(parsed.format("%Y-%m-%d").to_string(), "2026-01-15");
        assert!(parse_rfc3339("next tuesday").is_err());
    }
}
