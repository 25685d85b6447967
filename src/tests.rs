#[cfg(test)]
mod tests {

    mod model_tests {
        use crate::models::{BlogPost, CreateBlogPost, GalleryItem, Lesson, Member};
        use crate::store::{Document, Fields};
        use chrono::Utc;
        use serde_json::json;

        fn document(pairs: &[(&str, serde_json::Value)]) -> Document {
            let fields: Fields = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect();
            Document {
                id: "doc-1".to_string(),
                fields,
                created_at: Utc::now(),
                updated_at: None,
            }
        }

        #[test]
        fn test_blog_defaults_applied_at_boundary() {
            let doc = document(&[("title", json!("Grace")), ("content", json!("<p>x</p>"))]);
            let post = BlogPost::from_document(&doc);
            assert_eq!(post.author, "Unknown author");
            assert_eq!(post.image_url, None);
        }

        #[test]
        fn test_blog_empty_image_url_is_absent() {
            let doc = document(&[("title", json!("t")), ("imageURL", json!(""))]);
            let post = BlogPost::from_document(&doc);
            assert_eq!(post.image_url, None);
        }

        #[test]
        fn test_blog_create_fields() {
            let fields = CreateBlogPost {
                title: "Grace".to_string(),
                content: "<p>body</p>".to_string(),
                author: "E. Wright".to_string(),
            }
            .into_fields();
            assert_eq!(fields.get("title"), Some(&json!("Grace")));
            assert_eq!(fields.get("author"), Some(&json!("E. Wright")));
            assert!(!fields.contains_key(BlogPost::IMAGE_FIELD));
        }

        #[test]
        fn test_gallery_defaults() {
            let doc = document(&[]);
            let item = GalleryItem::from_document(&doc);
            assert_eq!(item.title, "Untitled");
            assert_eq!(item.description, "No description");
            assert_eq!(item.author_name, "Anonymous");
            assert_eq!(item.url, None);
        }

        #[test]
        fn test_member_trims_name_on_create() {
            let fields = crate::models::CreateMember {
                name: "  Ruth  ".to_string(),
                metadata: "<p>bio</p>".to_string(),
            }
            .into_fields();
            assert_eq!(fields.get("name"), Some(&json!("Ruth")));
        }

        #[test]
        fn test_member_image_field_name() {
            assert_eq!(Member::IMAGE_FIELD, "imageUrl");
            assert_eq!(BlogPost::IMAGE_FIELD, "imageURL");
        }

        #[test]
        fn test_lesson_date_parsing() {
            let doc = document(&[
                ("title", json!("Lesson 1")),
                ("lessonDate", json!("2026-08-27")),
                ("isCurrent", json!(true)),
            ]);
            let lesson = Lesson::from_document(&doc);
            assert_eq!(
                lesson.lesson_date,
                chrono::NaiveDate::from_ymd_opt(2026, 8, 27)
            );
            assert!(lesson.is_current);
        }

        #[test]
        fn test_lesson_missing_current_flag_defaults_false() {
            let doc = document(&[("title", json!("Lesson 1"))]);
            assert!(!Lesson::from_document(&doc).is_current);
        }
    }

    mod config_tests {
        use crate::config::Config;

        fn minimal_toml() -> &'static str {
            r#"
[site]
title = "Ministry Site"

[store]
base_url = "https://store.example/api"

[upload]
endpoint = "https://store.example/upload"
"#
        }

        #[test]
        fn test_defaults_fill_in() {
            let config: Config = toml::from_str(minimal_toml()).unwrap();
            assert_eq!(config.content.article_preview_words, 60);
            assert_eq!(config.content.profile_preview_words, 70);
            assert_eq!(config.upload.max_file_size, 10 * 1024 * 1024);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_preview_limits_are_configurable() {
            let toml = format!(
                "{}\n[content]\narticle_preview_words = 40\nprofile_preview_words = 90\n",
                minimal_toml().trim_end()
            );
            let config: Config = toml::from_str(&toml).unwrap();
            assert_eq!(config.content.article_preview_words, 40);
            assert_eq!(config.content.profile_preview_words, 90);
        }

        #[test]
        fn test_invalid_base_url_rejected() {
            let toml = minimal_toml().replace("https://store.example/api", "not a url");
            let config: Config = toml::from_str(&toml).unwrap();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_zero_preview_limit_rejected() {
            let toml = format!(
                "{}\n[content]\narticle_preview_words = 0\n",
                minimal_toml().trim_end()
            );
            let config: Config = toml::from_str(&toml).unwrap();
            assert!(config.validate().is_err());
        }
    }

    mod upload_type_tests {
        use crate::services::upload::{check_media_type, MediaFile};
        use crate::StoreError;

        fn file(filename: &str, content_type: Option<&str>) -> MediaFile {
            MediaFile {
                filename: filename.to_string(),
                content_type: content_type.map(str::to_string),
                data: vec![0u8; 16],
            }
        }

        #[test]
        fn test_accepts_declared_image_types() {
            for mime in ["image/jpeg", "image/png", "image/webp", "application/pdf"] {
                assert!(check_media_type(&file("f", Some(mime))).is_ok());
            }
        }

        #[test]
        fn test_guesses_type_from_filename() {
            assert_eq!(
                check_media_type(&file("photo.jpg", None)).unwrap(),
                "image/jpeg"
            );
            assert_eq!(
                check_media_type(&file("study.pdf", None)).unwrap(),
                "application/pdf"
            );
        }

        #[test]
        fn test_rejects_text_file() {
            let err = check_media_type(&file("notes.txt", None)).unwrap_err();
            assert!(matches!(err, StoreError::UnsupportedType { .. }));
        }

        #[test]
        fn test_rejects_unknown_type() {
            let err = check_media_type(&file("mystery", None)).unwrap_err();
            assert!(matches!(err, StoreError::UnsupportedType { .. }));
        }
    }

    mod ordering_tests {
        use crate::cli::list::display_ordering;
        use crate::models::{BlogPost, Member};
        use crate::store::Direction;

        #[test]
        fn test_member_directory_is_ascending() {
            assert_eq!(
                display_ordering(Member::COLLECTION).direction,
                Direction::Ascending
            );
        }

        #[test]
        fn test_blog_is_descending() {
            assert_eq!(
                display_ordering(BlogPost::COLLECTION).direction,
                Direction::Descending
            );
        }
    }
}
