mod polygon;
