//! Built-in home page content
//!
//! Shown when the content API cannot be reached so the home page still
//! renders a complete set of services, projects and testimonials.

use crate::types::{ImageAsset, PageContent, ProjectContent, ServiceContent, TestimonialContent};

fn photo(id: u64, pexels_id: u32, alt: &str) -> ImageAsset {
	ImageAsset::new(
		id,
		format!("https://images.pexels.com/photos/{pexels_id}/pexels-photo-{pexels_id}.jpeg"),
		alt,
		800,
		600,
	)
}

pub fn home_page() -> PageContent {
	PageContent {
		id: 0,
		slug: "home".to_string(),
		title: crate::SITE_TITLE.to_string(),
		description: "Expert construction and surveying services with a focus on quality and precision"
			.to_string(),
		content: String::new(),
		meta_title: "Expert Construction & Surveying Services".to_string(),
		meta_description: "Professional building, renovation and surveying services delivered with precision and excellence. Contact us for your next project.".to_string(),
		hero_image: Some(ImageAsset::new(
			0,
			"https://images.pexels.com/photos/1216589/pexels-photo-1216589.jpeg",
			"Construction site",
			1600,
			900,
		)),
		sections: Vec::new(),
		created_at: String::new(),
		updated_at: String::new(),
	}
}

fn service(id: u64, slug: &str, title: &str, description: &str, icon: &str, pexels_id: u32) -> ServiceContent {
	ServiceContent {
		id,
		slug: slug.to_string(),
		title: title.to_string(),
		description: description.to_string(),
		icon: icon.to_string(),
		content: String::new(),
		image: photo(id, pexels_id, title),
		features: Vec::new(),
		created_at: String::new(),
		updated_at: String::new(),
	}
}

pub fn services() -> Vec<ServiceContent> {
	vec![
		service(
			1,
			"building-construction",
			"Building Construction",
			"Full-service building construction for residential and commercial projects with quality craftsmanship.",
			"Building",
			2219024,
		),
		service(
			2,
			"surveying-services",
			"Surveying Services",
			"Comprehensive surveying services including land, building, and structural surveys with detailed reports.",
			"Ruler",
			834892,
		),
		service(
			3,
			"renovations",
			"Renovations",
			"Transform your space with our expert renovation services for kitchens, bathrooms, and whole-home remodels.",
			"Hammer",
			2284235,
		),
	]
}

fn project(
	id: u64,
	slug: &str,
	title: &str,
	description: &str,
	location: &str,
	completion_date: &str,
	image: ImageAsset,
) -> ProjectContent {
	ProjectContent {
		id,
		slug: slug.to_string(),
		title: title.to_string(),
		description: description.to_string(),
		location: location.to_string(),
		client: String::new(),
		completion_date: completion_date.to_string(),
		images: vec![image],
		testimonial: None,
		created_at: String::new(),
		updated_at: String::new(),
	}
}

pub fn projects() -> Vec<ProjectContent> {
	vec![
		project(
			1,
			"modern-office-complex",
			"Modern Office Complex",
			"A state-of-the-art office complex featuring sustainable design and cutting-edge amenities.",
			"London, UK",
			"2023-06-15",
			photo(4, 323705, "Modern Office Complex"),
		),
		project(
			2,
			"luxury-residential-development",
			"Luxury Residential Development",
			"Premium housing development with custom-designed homes and community amenities.",
			"Manchester, UK",
			"2023-04-10",
			photo(5, 1396122, "Luxury Residential Development"),
		),
		project(
			3,
			"historic-building-restoration",
			"Historic Building Restoration",
			"Careful restoration of a 19th-century building, preserving historical features while modernizing utilities.",
			"Edinburgh, UK",
			"2022-11-30",
			photo(6, 460680, "Historic Building Restoration"),
		),
	]
}

fn testimonial(id: u64, name: &str, company: &str, content: &str, rating: u8, date: &str) -> TestimonialContent {
	TestimonialContent {
		id,
		client_name: name.to_string(),
		client_company: Some(company.to_string()),
		client_photo: None,
		content: content.to_string(),
		rating,
		created_at: date.to_string(),
		updated_at: date.to_string(),
	}
}

pub fn testimonials() -> Vec<TestimonialContent> {
	vec![
		testimonial(
			1,
			"Sarah Johnson",
			"Johnson Properties",
			"NRJ Builders transformed our office space with exceptional attention to detail. Their team was professional, punctual, and delivered beyond our expectations.",
			5,
			"2023-05-10",
		),
		testimonial(
			2,
			"Michael Brown",
			"Brown Family Trust",
			"We hired NRJ for our home renovation and couldn't be happier with the results. Their craftsmanship is excellent, and they stayed within budget and timeline.",
			5,
			"2023-03-22",
		),
		testimonial(
			3,
			"Emma Wilson",
			"Wilson Commercial Ltd",
			"Their surveying team provided comprehensive reports that helped us make informed decisions for our commercial property purchase. Highly recommended.",
			4,
			"2023-06-05",
		),
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashSet;

	#[rstest]
	fn test_fallback_slugs_are_unique() {
		let services: HashSet<_> = services().into_iter().map(|s| s.slug).collect();
		let projects: HashSet<_> = projects().into_iter().map(|p| p.slug).collect();

		assert_eq!(services.len(), 3);
		assert_eq!(projects.len(), 3);
	}

	#[rstest]
	fn test_fallback_images_are_jpeg() {
		for service in services() {
			assert_eq!(service.image.mime_type, "image/jpeg");
			assert_eq!(service.image.alt, service.title);
		}
		for project in projects() {
			assert!(project.cover_image().is_some());
		}
	}

	#[rstest]
	fn test_fallback_ratings_within_range() {
		assert!(
			testimonials()
				.iter()
				.all(|t| t.rating <= TestimonialContent::MAX_RATING)
		);
	}
}
