mod common;

use common::{labels, noop, page};
use waypost::{ChildrenGroup, ConfigError, Modifier, RouteAction, RouteRegistrar};

#[test]
fn test_nested_prefixes_concatenate() {
    let mut registrar = RouteRegistrar::new();
    registrar
        .group(Modifier::new().prefix("/a"), |routes| {
            routes.group(Modifier::new().prefix("b"), |routes| {
                routes.group(Modifier::new().prefix("/c"), |routes| {
                    routes.add("leaf", page("leaf"))?;
                    Ok(())
                })
            })
        })
        .unwrap();

    assert_eq!(registrar.build_routes()[0].path, "/a/b/c/leaf");
}

#[test]
fn test_nested_names_concatenate_literally() {
    let mut registrar = RouteRegistrar::new();
    registrar
        .group(Modifier::new().name("admin"), |routes| {
            routes.group(Modifier::new().name(".users"), |routes| {
                routes.add("/list", page("list"))?.name(".list");
                Ok(())
            })
        })
        .unwrap();

    assert_eq!(
        registrar.build_routes()[0].name.as_deref(),
        Some("admin.users.list")
    );
}

#[test]
fn test_admin_group_keeps_double_dot() {
    let mut registrar = RouteRegistrar::new();
    registrar
        .group(Modifier::new().prefix("/admin").name("admin."), |routes| {
            routes.add("/users", page("users"))?.name(".list");
            Ok(())
        })
        .unwrap();

    let routes = registrar.build_routes();
    assert_eq!(routes[0].path, "/admin/users");
    assert_eq!(routes[0].name.as_deref(), Some("admin..list"));
}

#[test]
fn test_middleware_accumulates_group_first() {
    let mut registrar = RouteRegistrar::new();
    registrar
        .group(Modifier::new().middleware([noop("a"), noop("b")]), |routes| {
            routes.add("/x", page("x"))?.middleware(noop("c"));
            routes.add("/y", page("y"))?;
            Ok(())
        })
        .unwrap();

    let routes = registrar.build_routes();
    assert_eq!(labels(&routes[0]), vec!["a", "b", "c"]);
    assert_eq!(labels(&routes[1]), vec!["a", "b"]);
}

#[test]
fn test_groups_do_not_leak_into_siblings() {
    let mut registrar = RouteRegistrar::new();
    registrar
        .group(Modifier::new().prefix("/a").name("a.").middleware(noop("a")), |routes| {
            routes.add("/inner", page("inner"))?;
            Ok(())
        })
        .unwrap();
    registrar.add("/outer", page("outer")).unwrap();

    let routes = registrar.build_routes();
    assert_eq!(routes[1].path, "/outer");
    assert!(routes[1].name.is_none());
    assert!(routes[1].meta.middleware.is_empty());
    assert_eq!(registrar.depth(), 0);
}

#[test]
fn test_empty_action_is_a_configuration_error() {
    let mut registrar = RouteRegistrar::new();
    let err = registrar.add("/nothing", RouteAction::default()).unwrap_err();

    assert!(matches!(err, ConfigError::MissingAction { ref path } if path == "/nothing"));
    assert!(err.to_string().contains("action"));
    assert!(registrar.routes().is_empty());
}

#[test]
fn test_children_group_collects_children() {
    let mut registrar = RouteRegistrar::new();
    registrar
        .group(Modifier::new().prefix("/admin").name("admin.").middleware(noop("auth")), |routes| {
            routes.children_group(
                "/settings",
                ChildrenGroup::new(page("settings").with_redirect("/admin/settings/profile"))
                    .name("settings")
                    .middleware(noop("audit")),
                |children| {
                    children.add("profile", page("profile"))?.name(".profile");
                    children.add("/security", page("security"))?;
                    children.add("/billing", page("billing"))?;
                    Ok(())
                },
            )?;
            Ok(())
        })
        .unwrap();

    let routes = registrar.build_routes();
    assert_eq!(routes.len(), 1);

    let parent = &routes[0];
    assert_eq!(parent.path, "/admin/settings");
    assert_eq!(parent.name.as_deref(), Some("admin.settings"));
    assert_eq!(labels(parent), vec!["auth", "audit"]);
    assert!(parent.redirect.is_some());
    assert_eq!(parent.children.len(), 3);

    let profile = &parent.children[0];
    assert_eq!(profile.path, "/profile");
    assert_eq!(profile.name.as_deref(), Some("admin..profile"));
    assert_eq!(labels(profile), vec!["auth"]);
}

#[test]
fn test_nested_children_groups() {
    let mut registrar = RouteRegistrar::new();
    registrar
        .children_group("/a", page("a"), |level1| {
            level1.children_group("/b", page("b"), |level2| {
                level2.add("/c", page("c"))?;
                Ok(())
            })?;
            level1.add("/d", page("d"))?;
            Ok(())
        })
        .unwrap();
    registrar.add("/e", page("e")).unwrap();

    let routes = registrar.build_routes();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].children.len(), 2);
    assert_eq!(routes[0].children[0].children[0].path, "/c");
    assert_eq!(routes[0].children[1].path, "/d");
    assert_eq!(routes[1].path, "/e");
}

#[test]
fn test_scope_guard_mirrors_group() {
    let mut registrar = RouteRegistrar::new();
    {
        let mut scope = registrar.scope(Modifier::new().prefix("/docs"));
        scope.add("/intro", page("intro")).unwrap();
        assert_eq!(scope.depth(), 1);
    }
    registrar.add("/after", page("after")).unwrap();

    let paths: Vec<_> = registrar
        .build_routes()
        .into_iter()
        .map(|route| route.path)
        .collect();
    assert_eq!(paths, vec!["/docs/intro", "/after"]);
}

#[test]
fn test_find_by_name_searches_children() {
    let mut registrar = RouteRegistrar::new();
    registrar
        .group(Modifier::new().name("shop"), |routes| {
            routes.children_group("/cart", ChildrenGroup::new(page("cart")).name(".cart"), |children| {
                children.add("/item", page("item"))?.name(".item");
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();

    let routes = registrar.build_routes();
    assert_eq!(routes[0].name.as_deref(), Some("shop.cart"));

    let child = routes[0].find_by_name("shop.item").unwrap();
    assert_eq!(child.path, "/item");
    assert_eq!(child.to_location().name.as_deref(), Some("shop.item"));
}

#[test]
fn test_build_routes_is_side_effect_free() {
    let mut registrar = RouteRegistrar::new();
    registrar.add("/a", page("a")).unwrap();

    assert_eq!(registrar.build_routes().len(), 1);
    assert_eq!(registrar.build_routes().len(), 1);
    assert_eq!(registrar.routes().len(), 1);
}
